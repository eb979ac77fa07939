use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }
}

pub mod say_hello {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub name: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
    }

    impl APIResponse {
        pub fn new(name: &str) -> Self {
            Self {
                message: format!("Hello, {}", name),
            }
        }
    }
}
