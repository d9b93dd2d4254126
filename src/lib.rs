//! # aab
//!
//! A library for reading application metadata - package name, version,
//! display label and launcher icon - from Android App Bundle (.aab) files.
//!
//! A bundle is a zip container whose manifest and resource table are
//! protobuf-encoded. Opening a bundle decodes both once; the label and
//! icon are resolved on demand against the resource table under an
//! optional device configuration (screen density).
//!
//! # Examples
//!
//! ```no_run
//!  use aab::Aab;
//!  use image::GenericImageView;
//!
//!  let bundle = Aab::open("app-release.aab").unwrap();
//!  println!("{} v{}", bundle.package_name(), bundle.manifest().version_name);
//!  println!("label: {}", bundle.label(None));
//!  let icon = bundle.icon(None).unwrap();
//!  println!("icon: {}x{}", icon.width(), icon.height());
//! ```

pub mod bundle;
pub mod error;
pub mod manifest;
pub mod pb;
pub mod resources;

pub use bundle::{Aab, MANIFEST_PATH, RESOURCE_TABLE_PATH, SUPPORTED_ICON_FORMATS};
pub use error::{AabError, AabResult};
pub use manifest::{Application, Manifest, ResourceRef};
pub use resources::ResourceSet;
