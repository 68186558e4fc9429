pub mod config;
pub mod debounce;
pub mod dialog;
pub mod dispatch;
pub mod host;
pub mod portal;
pub mod preferences;
pub mod presenter;
pub mod search;
pub mod toast;
pub mod validation;

pub use config::{ConfigError, PortalConfig};
pub use portal::{Portal, SubmitOutcome};

pub mod prelude {
    pub use crate::config::PortalConfig;
    pub use crate::debounce::{Debounce, DebouncedTask};
    pub use crate::dialog::{DialogController, DialogDescriptor, DialogId, DialogRegistry};
    pub use crate::dispatch::{Command, CommandMap, Trigger};
    pub use crate::host::{DialogLookup, FieldSurface, MemoryPage, PageHost};
    pub use crate::portal::{Portal, SubmitOutcome};
    pub use crate::preferences::{JsonFileBackend, MemoryBackend, PreferenceBackend, Preferences};
    pub use crate::presenter::ErrorPresenter;
    pub use crate::search::SearchBox;
    pub use crate::toast::{Toast, ToastLevel, ToastQueue};
    pub use crate::validation::{FieldValue, FormKind, FormValues, ValidationReport, Validator};
}
