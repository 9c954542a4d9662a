pub mod model;
pub mod repo;

pub use model::{DoctorProfile, NewDoctorProfile};
pub use repo::attach_doctor_profile;
