//! Compute use case.
//!
//! The dispatch pipeline behind `POST /bfhl`:
//!
//! 1. identity check (the response cannot be formatted without it)
//! 2. body decoding and validation into an [`OperationRequest`]
//! 3. routing to exactly one executor
//!
//! Arithmetic executors run inline. The `AI` operation is the only one
//! that suspends: it calls the [`AnswerGateway`] under a fixed time budget
//! and never retries.

use crate::config::{ConfigurationError, ServiceConfig};
use crate::ports::answer_gateway::{AnswerError, AnswerGateway};
use bfhl_domain::{
    LcmOverflow, OperationKind, OperationOutput, OperationRequest, Question, ValidationError,
    extract_single_word, fibonacci, filter_primes, hcf, lcm, single_word_prompt,
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a compute request.
#[derive(Error, Debug)]
pub enum ComputeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Overflow(#[from] LcmOverflow),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Successful compute result, ready for the response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeOutput {
    pub official_email: String,
    pub operation: OperationKind,
    pub data: OperationOutput,
}

/// Use case for running one compute request.
#[derive(Clone)]
pub struct ComputeUseCase {
    config: Arc<ServiceConfig>,
    answers: Option<Arc<dyn AnswerGateway>>,
}

impl ComputeUseCase {
    /// Create a use case without an answer service; the `AI` operation
    /// will fail with [`ConfigurationError::MissingCredential`].
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        Self {
            config,
            answers: None,
        }
    }

    /// Attach the answer service adapter.
    pub fn with_answer_gateway(mut self, gateway: Arc<dyn AnswerGateway>) -> Self {
        self.answers = Some(gateway);
        self
    }

    /// Run the full pipeline on a parsed request body.
    pub async fn execute(&self, body: &Value) -> Result<ComputeOutput, ComputeError> {
        let official_email = self.config.identity()?.to_string();
        let request = OperationRequest::from_body(body)?;
        let operation = request.kind();

        debug!(%operation, "Dispatching compute request");
        let data = self.run(request).await?;

        Ok(ComputeOutput {
            official_email,
            operation,
            data,
        })
    }

    /// Execute an already validated request.
    pub async fn run(&self, request: OperationRequest) -> Result<OperationOutput, ComputeError> {
        let output = match request {
            OperationRequest::Fibonacci(count) => OperationOutput::Fibonacci(fibonacci(count.get())),
            OperationRequest::Prime(values) => {
                OperationOutput::Primes(filter_primes(values.as_slice()))
            }
            OperationRequest::Lcm(values) => OperationOutput::Lcm(lcm(values.as_slice())?),
            OperationRequest::Hcf(values) => OperationOutput::Hcf(hcf(values.as_slice())),
            OperationRequest::Ai(question) => OperationOutput::Answer(self.ask(&question).await?),
        };
        Ok(output)
    }

    async fn ask(&self, question: &Question) -> Result<String, ComputeError> {
        let gateway = self
            .answers
            .as_ref()
            .ok_or(ConfigurationError::MissingCredential)?;

        let budget = self.config.answer_timeout;
        let prompt = single_word_prompt(question);
        info!(
            question_len = question.utf16_len(),
            timeout_ms = budget.as_millis() as u64,
            "Delegating question to answer service"
        );

        let reply = match tokio::time::timeout(budget, gateway.ask(&prompt, budget)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(e)) => {
                warn!(error = %e, "Answer service call failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(timeout_ms = budget.as_millis() as u64, "Answer service call timed out");
                return Err(AnswerError::Timeout.into());
            }
        };

        let answer = extract_single_word(&reply);
        debug!(%answer, "Answer service replied");
        Ok(answer)
    }
}
