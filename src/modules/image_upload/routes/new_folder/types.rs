pub mod request {
    use crate::modules::auth::AdminSession;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        #[serde(default)]
        pub new_folder: String,
    }

    pub struct Payload {
        pub session: AdminSession,
        pub body: Body,
    }
}

pub mod response {
    use super::super::super::PAGE_PATH;
    use axum::response::{IntoResponse, Redirect};

    pub enum Success {
        FolderConfirmed,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FolderConfirmed => Redirect::to(PAGE_PATH).into_response(),
            }
        }
    }

    pub enum Error {}

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {}
        }
    }

    pub type Response = Result<Success, Error>;
}
