pub mod request {
    use crate::modules::auth::AdminSession;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub folder: Option<String>,
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
        FolderSelected,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FolderSelected => Redirect::to(PAGE_PATH).into_response(),
            }
        }
    }

    pub enum Error {
        NoFolderChosen,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoFolderChosen => Redirect::to(PAGE_PATH).into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
