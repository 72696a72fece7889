pub mod icons;
pub mod toast;

pub use icons::{PdfIcon, UploadIcon};
pub use toast::Toast;
