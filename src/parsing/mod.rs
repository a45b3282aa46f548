pub mod go;
pub mod position;
pub mod signature;
pub mod source;

pub use go::{GoParser, GoSignatureRenderer};
pub use position::{LineIndex, Location, PositionResolver, to_position};
pub use signature::{Signature, SignatureRenderer};
pub use source::{Package, ParsedFile, SourceContext};
