//! The bundle facade: opens an `.aab` container, decodes its compiled
//! manifest and resource table once, and resolves the label and icon on
//! demand.

use crate::error::{AabError, AabResult};
use crate::manifest::{Manifest, ResourceRef};
use crate::pb;
use crate::resources::ResourceSet;
use image::{DynamicImage, ImageFormat};
use log::debug;
use prost::Message;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Mutex;
use zip::read::ZipArchive;
use zip::result::ZipError;

/// Archive member holding the compiled manifest.
pub const MANIFEST_PATH: &str = "base/manifest/AndroidManifest.xml";
/// Archive member holding the compiled resource table.
pub const RESOURCE_TABLE_PATH: &str = "base/resources.pb";

/// Raster formats accepted for icons, sniffed in this order. Anything else
/// is rejected before decoding rather than registered ambiently.
pub const SUPPORTED_ICON_FORMATS: [ImageFormat; 3] =
    [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::WebP];

/// An opened Android App Bundle.
///
/// The manifest and resource table are decoded eagerly at open time and
/// are immutable for the bundle's lifetime; referenced members such as
/// icon drawables are read lazily by path. Accessors take `&self`, so
/// concurrent lookups on one instance are safe; the underlying archive
/// handle is serialized internally for the lazy reads.
pub struct Aab<R: Read + Seek> {
    archive: Mutex<ZipArchive<R>>,
    manifest: Manifest,
    resources: ResourceSet,
}

impl Aab<File> {
    /// Opens a bundle from disk.
    pub fn open(path: impl AsRef<Path>) -> AabResult<Aab<File>> {
        let file = File::open(path.as_ref())?;
        Aab::from_reader(file)
    }
}

impl<R: Read + Seek> Aab<R> {
    /// Opens a bundle from any seekable byte source, e.g. a `Cursor` over
    /// an in-memory buffer.
    ///
    /// A missing manifest member is the normal failure mode for a zip that
    /// is not an app bundle and is reported as [`AabError::EntryNotFound`]
    /// with the offending path.
    pub fn from_reader(reader: R) -> AabResult<Aab<R>> {
        let mut archive = ZipArchive::new(reader)?;

        let manifest_bytes = read_member(&mut archive, MANIFEST_PATH)?;
        let document = pb::XmlNode::decode(manifest_bytes.as_slice())?;
        let manifest = Manifest::from_document(&document);

        let table_bytes = read_member(&mut archive, RESOURCE_TABLE_PATH)?;
        let table = pb::ResourceTable::decode(table_bytes.as_slice())?;
        let resources = ResourceSet::from_table(table, &manifest.package);

        debug!(
            "opened bundle: package {:?}, versionCode {}",
            manifest.package, manifest.version_code
        );
        Ok(Aab {
            archive: Mutex::new(archive),
            manifest,
            resources,
        })
    }

    /// The manifest root's `package` attribute.
    pub fn package_name(&self) -> &str {
        &self.manifest.package
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolves the application label under `config`.
    ///
    /// An unset or malformed label reference, or one that matches nothing
    /// in the resource table, yields an empty string.
    pub fn label(&self, config: Option<&pb::Configuration>) -> String {
        let raw = &self.manifest.application.label;
        if raw.is_empty() {
            return String::new();
        }
        match ResourceRef::parse(raw) {
            Some(reference) => self
                .resources
                .resolve(&reference.kind, &reference.name, config)
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Resolves the application icon under `config` and decodes the
    /// referenced archive member into an image.
    ///
    /// Unlike [`Aab::label`], absence is an error here: the caller asked
    /// for an image that is expected to exist, so a missing, malformed or
    /// unresolved reference is reported instead of an empty sentinel.
    pub fn icon(&self, config: Option<&pb::Configuration>) -> AabResult<DynamicImage> {
        let raw = &self.manifest.application.icon;
        if raw.is_empty() {
            return Err(AabError::IconMissing);
        }
        let reference =
            ResourceRef::parse(raw).ok_or_else(|| AabError::IconInvalid(raw.clone()))?;
        let path = self
            .resources
            .resolve(&reference.kind, &reference.name, config)
            .ok_or_else(|| AabError::IconUnresolved(raw.clone()))?;
        let data = self.read_member(&format!("base/{path}"))?;
        decode_icon(&data)
    }

    /// Reads a member lazily by its full internal path.
    fn read_member(&self, name: &str) -> AabResult<Vec<u8>> {
        let mut archive = match self.archive.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        read_member(&mut archive, name)
    }

    /// Releases the underlying archive (and file handle, when the bundle
    /// is file-backed). Dropping the bundle has the same effect; consuming
    /// `self` guarantees the handle is released exactly once.
    pub fn close(self) {}
}

fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> AabResult<Vec<u8>> {
    let mut member = match archive.by_name(name) {
        Ok(member) => member,
        Err(ZipError::FileNotFound) => return Err(AabError::EntryNotFound(name.to_string())),
        Err(err) => return Err(err.into()),
    };
    let mut data = Vec::with_capacity(member.size() as usize);
    member.read_to_end(&mut data)?;
    Ok(data)
}

fn decode_icon(data: &[u8]) -> AabResult<DynamicImage> {
    let format = image::guess_format(data)?;
    if !SUPPORTED_ICON_FORMATS.contains(&format) {
        return Err(AabError::UnsupportedImageFormat(format));
    }
    Ok(image::load_from_memory_with_format(data, format)?)
}
