use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("no command configured")]
    EmptyCommand,
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {output}")]
    Status {
        program: String,
        status: ExitStatus,
        output: String,
    },
}
