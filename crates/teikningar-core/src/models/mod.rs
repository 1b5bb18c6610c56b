mod address;
mod blueprint;
mod preferences;

pub use address::{AddressRecord, Coordinates};
pub use blueprint::{
    BlueprintImage, BlueprintRecord, FULL_IMAGE_LABEL, THUMBNAIL_IMAGE_LABEL,
};
pub use preferences::{PersistentState, PreferenceEntry, Sketches};
