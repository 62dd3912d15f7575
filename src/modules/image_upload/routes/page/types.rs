pub mod request {
    pub struct Payload {
        pub token: Option<String>,
    }
}

pub mod response {
    use crate::modules::image_upload::view;
    use axum::response::{IntoResponse, Redirect};
    use maud::Markup;

    pub enum Success {
        Form(Markup),
        Unauthorized,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Form(page) => page.into_response(),
                Self::Unauthorized => view::unauthorized().into_response(),
            }
        }
    }

    pub enum Error {
        Unauthenticated(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Unauthenticated(login_path) => Redirect::to(&login_path).into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
