mod reminder;
mod sos_alert;
mod status;

pub mod dtos {
    pub use crate::reminder::dtos::*;
    pub use crate::sos_alert::dtos::*;
}

pub use crate::reminder::api::*;
pub use crate::sos_alert::api::*;
pub use crate::status::api::*;
