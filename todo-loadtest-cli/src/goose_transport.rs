//! Transport that sends scenario requests through a goose user, so every call
//! lands in goose's request metrics under its step name

use async_trait::async_trait;
use goose::goose::{GooseMethod, GooseRequest, GooseResponse, GooseUser};
use goose::prelude::{TransactionError, TransactionResult};
use std::time::Duration;
use todo_loadtest_http::{ApiRequest, Exchange, HttpMethod, Transport};
use tracing::warn;

pub struct GooseTransport<'a> {
    user: &'a mut GooseUser,
    timeout: Duration,
    first_failure: Option<Box<TransactionError>>,
}

impl<'a> GooseTransport<'a> {
    pub fn new(user: &'a mut GooseUser, timeout: Duration) -> Self {
        Self {
            user,
            timeout,
            first_failure: None,
        }
    }

    /// Outcome for the enclosing goose transaction: the first failed request,
    /// if any
    pub fn finish(self) -> TransactionResult {
        match self.first_failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }

    fn note(&mut self, result: TransactionResult) {
        if let Err(failure) = result {
            self.first_failure.get_or_insert(failure);
        }
    }
}

pub fn goose_method(method: HttpMethod) -> GooseMethod {
    match method {
        HttpMethod::Get => GooseMethod::Get,
        HttpMethod::Post => GooseMethod::Post,
        HttpMethod::Put => GooseMethod::Put,
        HttpMethod::Delete => GooseMethod::Delete,
    }
}

#[async_trait]
impl Transport for GooseTransport<'_> {
    async fn execute(&mut self, request: &ApiRequest) -> Exchange {
        let url = self
            .user
            .build_url(&request.path)
            .unwrap_or_else(|_| request.path.clone());

        let mut builder = match self
            .user
            .get_request_builder(&goose_method(request.method), &request.path)
        {
            Ok(builder) => builder.timeout(self.timeout),
            Err(e) => return Exchange::failed(request, url, e.to_string(), Duration::ZERO),
        };
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body_text() {
            builder = builder.body(body);
        }

        let goose_request = GooseRequest::builder()
            .method(goose_method(request.method))
            .path(request.path.as_str())
            .name(request.name.as_str())
            .set_request_builder(builder)
            .build();

        let GooseResponse {
            request: mut metric,
            response,
        } = match self.user.request(goose_request).await {
            Ok(goose) => goose,
            Err(e) => return Exchange::failed(request, url, e.to_string(), Duration::ZERO),
        };
        let elapsed = Duration::from_millis(metric.response_time);

        let exchange = match response {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => Exchange::received(request, url, status, body, elapsed),
                    Err(e) => {
                        warn!("Failed to read {} response body: {}", request.name, e);
                        let mut exchange = Exchange::received(request, url, status, String::new(), elapsed);
                        exchange.error = Some(e.to_string());
                        exchange
                    }
                }
            }
            Err(e) => Exchange::failed(request, url, e.to_string(), elapsed),
        };

        // Goose only looks at the status class; the step's accepted codes decide
        let verdict = if exchange.passed {
            self.user.set_success(&mut metric)
        } else {
            self.user.set_failure(
                &exchange.failure_message(),
                &mut metric,
                None,
                Some(&exchange.response_body),
            )
        };
        self.note(verdict);

        exchange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert!(matches!(goose_method(HttpMethod::Get), GooseMethod::Get));
        assert!(matches!(goose_method(HttpMethod::Post), GooseMethod::Post));
        assert!(matches!(goose_method(HttpMethod::Put), GooseMethod::Put));
        assert!(matches!(goose_method(HttpMethod::Delete), GooseMethod::Delete));
    }
}
