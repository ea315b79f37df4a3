#[derive(thiserror::Error)]
pub enum ClassError {
    #[error("The portal rejected the session credentials.")]
    AuthenticationFailed,
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("The portal answered with an unexpected status: {status}")]
    Portal { status: reqwest::StatusCode },
    #[error("Failed to decode the portal response.")]
    MalformedResponse(#[source] anyhow::Error),
    #[error("{0}")]
    Validation(String),
    #[error("The portal did not finish background processing within the poll budget.")]
    ProcessingTimeout,
}

impl std::fmt::Debug for ClassError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
