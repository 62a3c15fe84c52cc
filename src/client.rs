use crate::auth::SignedRequest;
use reqwest::RequestBuilder;
use tracing::trace;

/// Attaches signed authorization headers to an outgoing request.
pub trait SignRequest {
    fn sign_with(self, signed: &SignedRequest) -> Self;
}

impl SignRequest for RequestBuilder {
    fn sign_with(self, signed: &SignedRequest) -> Self {
        signed.headers().into_iter().fold(self, |builder, (name, value)| {
            trace!(header = name, "attaching signed header");
            builder.header(name, value)
        })
    }
}
