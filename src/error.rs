use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartSwitchError {
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("A branch named '{name}' already exists")]
    BranchExists { name: String },

    #[error("Unknown response")]
    UnknownResponse,
}
