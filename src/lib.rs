//! Lockbox - encrypted configuration documents you can commit.
//!
//! A structured document (YAML or JSON) is stored on disk encrypted with
//! AES-128-GCM. The key comes from an environment variable or a key file
//! kept out of version control. Reads decrypt and parse on demand; edits go
//! through a temporary plaintext draft and are re-encrypted atomically.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── generate_key  # Print or write a new key
//! │   ├── show          # Print the decrypted document
//! │   ├── get           # Print one value
//! │   └── edit          # Edit in $EDITOR
//! └── core/             # Core library components
//!     ├── config        # Construction options, lockbox.toml
//!     ├── keys/         # Key type and env/file resolution
//!     ├── cipher/       # Envelope codec
//!     │   ├── mod       # Cipher trait
//!     │   ├── envelope  # ct--iv--tag text form
//!     │   └── aes_gcm   # AES-128-GCM implementation
//!     ├── format/       # YAML and JSON plaintext formats
//!     ├── domain/       # Value and Mapping
//!     ├── document      # Atomic file storage
//!     └── encrypted/    # EncryptedConfig engine and edit drafts
//! ```
//!
//! # Example
//!
//! ```no_run
//! use lockbox::{EncryptedConfig, Options};
//!
//! # fn main() -> lockbox::error::Result<()> {
//! let mut config = EncryptedConfig::new(Options::default())?;
//! if let Some(host) = config.dig(&["database", "host"])? {
//!     println!("{}", host);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Options;
pub use crate::core::domain::{Mapping, Value};
pub use crate::core::encrypted::{Draft, EncryptedConfig};
pub use crate::core::format::Serializer;
pub use crate::core::keys::{EnvSource, Key, ProcessEnv};
