pub mod request {
    use crate::modules::auth::AdminSession;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    pub type File = FieldData<NamedTempFile>;

    #[derive(TryFromMultipart)]
    pub struct Body {
        #[form_data(limit = "10MiB")]
        pub file: Option<File>,
    }

    pub struct Payload {
        pub session: AdminSession,
        pub body: Body,
    }
}

pub mod response {
    use super::super::super::PAGE_PATH;
    use axum::{
        http::StatusCode,
        response::{IntoResponse, Redirect},
    };
    use maud::html;

    pub enum Success {
        FileSelected,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FileSelected => Redirect::to(PAGE_PATH).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToReadFile,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToReadFile => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    html! { div { "Failed to read the selected image" } },
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
