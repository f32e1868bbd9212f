#![forbid(unsafe_code)]

pub mod diagram;
pub mod element;
pub mod elements;
pub mod error;
pub mod export;
pub mod geom;
pub mod layout;
pub mod mapper;
pub mod model;
pub mod scene;
pub mod theme;

pub use diagram::ArchitectureSpec;
pub use element::{Element, parse_element};
pub use error::{DeckError, DeckResult};
pub use geom::{Color, Emu, Rect};
pub use layout::{LayoutId, LayoutTemplate, SlotRole, TemplateSet, UnknownLayoutPolicy};
pub use mapper::Mapper;
pub use model::{ContentDocument, ContentFile, SlideSpec};
pub use scene::{ElementContent, PositionedElement, RenderedSlide};
pub use theme::{SLIDE_HEIGHT, SLIDE_WIDTH, Theme};
