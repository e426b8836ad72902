pub use crate::get_assets_dir;
pub use crate::rules::*;
pub use crate::sprite::*;
pub use crate::terrain::*;
pub use crate::vec3::*;
