pub mod link;

pub use link::LinkMap;

use serde::Serialize;

use crate::error::AppResult;
use crate::inbox::LocationPoint;

pub trait MapSurface {
    fn draw(&mut self, point: &LocationPoint) -> AppResult<String>;
    fn dispose(&mut self);
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum MapRender {
    Rendered(String),
    Fallback(String),
}

impl MapRender {
    pub fn text(&self) -> &str {
        match self {
            MapRender::Rendered(text) | MapRender::Fallback(text) => text,
        }
    }
}

type SurfaceFactory = Box<dyn Fn() -> Box<dyn MapSurface>>;

pub struct MapSlot {
    factory: SurfaceFactory,
    active: Option<Box<dyn MapSurface>>,
}

impl MapSlot {
    pub fn new<F, S>(factory: F) -> Self
    where
        F: Fn() -> S + 'static,
        S: MapSurface + 'static,
    {
        Self {
            factory: Box::new(move || Box::new(factory()) as Box<dyn MapSurface>),
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Replaces any active surface with a fresh one drawing `point`. A failing
    /// surface degrades to plain coordinates and is not kept.
    pub fn show(&mut self, point: &LocationPoint) -> MapRender {
        self.close();

        let mut surface = (self.factory)();
        match surface.draw(point) {
            Ok(rendered) => {
                self.active = Some(surface);
                MapRender::Rendered(rendered)
            }
            Err(err) => {
                log::warn!("map rendering failed, showing coordinates instead: {err}");
                surface.dispose();
                MapRender::Fallback(coordinate_text(point))
            }
        }
    }

    pub fn close(&mut self) {
        if let Some(mut surface) = self.active.take() {
            surface.dispose();
        }
    }
}

impl Default for MapSlot {
    fn default() -> Self {
        Self::new(LinkMap::default)
    }
}

impl Drop for MapSlot {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for MapSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSlot")
            .field("active", &self.active.is_some())
            .finish()
    }
}

pub fn coordinate_text(point: &LocationPoint) -> String {
    format!("{:.5}, {:.5} ({})", point.lat, point.lng, point.label)
}
