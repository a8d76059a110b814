use actix_web::body::BoxBody;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder};

/// A redirect to the gateway payment page, left to the host application to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Executed by the hosting web framework (Actix-Web can return it as a responder).
    Framework(String),
    /// Raw header for hosts that write the HTTP response themselves.
    Header { name: &'static str, value: String },
}

impl Redirect {
    pub fn framework(url: impl Into<String>) -> Self {
        Redirect::Framework(url.into())
    }

    pub fn location(url: impl Into<String>) -> Self {
        Redirect::Header {
            name: "Location",
            value: url.into(),
        }
    }

    /// Target URL of the redirect.
    pub fn url(&self) -> &str {
        match self {
            Redirect::Framework(url) => url,
            Redirect::Header { value, .. } => value,
        }
    }

    /// `302 Found` pointing at [`url`](Self::url).
    pub fn into_http_response(self) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, self.url()))
            .finish()
    }
}

impl Responder for Redirect {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        self.into_http_response()
    }
}
