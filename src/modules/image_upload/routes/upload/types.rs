pub mod request {
    use crate::modules::auth::AdminSession;

    pub struct Payload {
        pub session: AdminSession,
    }
}

pub mod response {
    use super::super::super::PAGE_PATH;
    use axum::response::{IntoResponse, Redirect};

    pub enum Success {
        /// The outcome is shown as a notification on the page.
        Uploaded,
        NothingToUpload,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Uploaded | Self::NothingToUpload => {
                    Redirect::to(PAGE_PATH).into_response()
                }
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
