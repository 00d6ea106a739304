use derive_more::{Display, Error, From, IsVariant};
use libc::c_int;

#[derive(Debug, Display, Clone, Error)]
#[display("permission denied for the provided path")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains an interior nul byte")]
pub struct InvalidPathError;

#[derive(Debug, Display, Clone, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit for process")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("file contents are not valid UTF-8")]
pub struct InvalidUtf8Error;

#[derive(Debug, Display, Clone, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, Clone, From, Error, IsVariant)]
pub enum ReadError {
    Access(AccessError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    PathLength(PathLengthError),
    ExcessiveLinks(ExcessiveLinksError),
    InvalidPath(InvalidPathError),
    IsDirectory(IsDirectoryError),
    FileCount(FileCountError),
    OOM(OOMError),
    Interrupt(InterruptError),
    IO(IOError),
    InvalidUtf8(InvalidUtf8Error),
    Unexpected(UnexpectedError),
}

impl ReadError {
    /// Interprets an errno value left by `open` or `read`.
    pub(crate) fn interpret_raw_error(errno: c_int) -> ReadError {
        match errno {
            libc::EACCES | libc::EPERM => AccessError.into(),
            libc::ENOENT => MissingComponentError.into(),
            libc::ENOTDIR => NonDirComponentError.into(),
            libc::ENAMETOOLONG => PathLengthError.into(),
            libc::ELOOP => ExcessiveLinksError.into(),
            libc::EISDIR => IsDirectoryError.into(),
            libc::EMFILE | libc::ENFILE => FileCountError.into(),
            libc::ENOMEM => OOMError.into(),
            libc::EINTR => InterruptError.into(),
            libc::EIO => IOError.into(),
            e => UnexpectedError(e).into(),
        }
    }
}
