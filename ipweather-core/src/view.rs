use std::{
    collections::BTreeMap,
    fmt::Debug,
    sync::{Mutex, MutexGuard},
};

use serde::Serialize;

use crate::present::Rendering;

/// Named regions the host page exposes. The widget never creates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Region {
    Temperature,
    WeatherIcon,
    Sky,
    City,
    Main,
    FailureMessage,
    LoadingIcon,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Temperature => "temperature",
            Region::WeatherIcon => "weather_icon",
            Region::Sky => "sky",
            Region::City => "city",
            Region::Main => "main",
            Region::FailureMessage => "failureMessage",
            Region::LoadingIcon => "loadingIcon",
        }
    }

    pub const fn all() -> &'static [Region] {
        &[
            Region::Temperature,
            Region::WeatherIcon,
            Region::Sky,
            Region::City,
            Region::Main,
            Region::FailureMessage,
            Region::LoadingIcon,
        ]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Region {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Region::all()
            .iter()
            .copied()
            .find(|region| region.as_str() == value)
            .ok_or_else(|| anyhow::anyhow!("Unknown region '{value}'"))
    }
}

/// Rendering surface the widget writes into.
///
/// Implementations must treat a region they do not have as a silent no-op.
pub trait ViewSink: Send + Sync + Debug {
    fn set_text(&self, region: Region, value: &str);
    fn set_color(&self, region: Region, color: &str);
    fn set_visible(&self, region: Region, visible: bool);
}

/// Which of the three mutually exclusive panels is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DisplayState {
    Loading,
    Content,
    Failure,
}

/// The only writer of view state; drives a [`ViewSink`].
#[derive(Debug)]
pub struct ViewController<S: ViewSink> {
    sink: S,
}

impl<S: ViewSink> ViewController<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn show_failure(&self) {
        self.sink.set_visible(Region::Main, false);
        self.sink.set_visible(Region::FailureMessage, true);
        self.sink.set_visible(Region::LoadingIcon, false);
    }

    pub fn show_content(&self) {
        self.sink.set_visible(Region::Main, true);
        self.sink.set_visible(Region::FailureMessage, false);
        self.sink.set_visible(Region::LoadingIcon, false);
    }

    pub fn set_field(&self, region: Region, value: &str) {
        self.sink.set_text(region, value);
    }

    pub fn set_temperature_color(&self, color: &str) {
        self.sink.set_color(Region::Temperature, color);
    }

    /// Writes every present part of `rendering`; absent parts keep their previous value.
    pub fn apply(&self, rendering: &Rendering) {
        if let Some(temperature) = &rendering.temperature {
            self.set_field(Region::Temperature, &temperature.text);
            self.set_temperature_color(&temperature.color);
        }
        if let Some(icon) = &rendering.weather_icon {
            self.set_field(Region::WeatherIcon, icon);
        }
        if let Some(sky) = &rendering.sky {
            self.set_field(Region::Sky, sky);
        }
        if let Some(city) = &rendering.city {
            self.set_field(Region::City, city);
        }
    }
}

/// Current contents of one region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegionState {
    pub text: Option<String>,
    pub color: Option<String>,
    pub visible: bool,
}

/// In-memory region registry standing in for a page.
#[derive(Debug, Default)]
pub struct MemoryView {
    regions: Mutex<BTreeMap<Region, RegionState>>,
}

impl MemoryView {
    /// A page exposing only `regions`; writes to any other region are dropped.
    pub fn with_regions(regions: &[Region]) -> Self {
        let mut map = BTreeMap::new();
        for region in regions {
            map.insert(*region, RegionState::default());
        }
        // Initial skeleton: spinner showing, both panels hidden.
        if let Some(loading) = map.get_mut(&Region::LoadingIcon) {
            loading.visible = true;
        }

        Self {
            regions: Mutex::new(map),
        }
    }

    /// A page exposing every region.
    pub fn page() -> Self {
        Self::with_regions(Region::all())
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<Region, RegionState>> {
        self.regions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, region: Region, f: impl FnOnce(&mut RegionState)) {
        if let Some(state) = self.lock().get_mut(&region) {
            f(state);
        }
    }

    pub fn region(&self, region: Region) -> Option<RegionState> {
        self.lock().get(&region).cloned()
    }

    pub fn text(&self, region: Region) -> Option<String> {
        self.region(region).and_then(|state| state.text)
    }

    pub fn color(&self, region: Region) -> Option<String> {
        self.region(region).and_then(|state| state.color)
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.region(region).is_some_and(|state| state.visible)
    }

    pub fn snapshot(&self) -> BTreeMap<Region, RegionState> {
        self.lock().clone()
    }

    /// Panel state as implied by region visibility.
    pub fn display_state(&self) -> DisplayState {
        if self.is_visible(Region::Main) {
            DisplayState::Content
        } else if self.is_visible(Region::FailureMessage) {
            DisplayState::Failure
        } else {
            DisplayState::Loading
        }
    }
}

impl ViewSink for MemoryView {
    fn set_text(&self, region: Region, value: &str) {
        self.update(region, |state| state.text = Some(value.to_string()));
    }

    fn set_color(&self, region: Region, color: &str) {
        self.update(region, |state| state.color = Some(color.to_string()));
    }

    fn set_visible(&self, region: Region, visible: bool) {
        self.update(region, |state| state.visible = visible);
    }
}

impl<T: ViewSink + ?Sized> ViewSink for std::sync::Arc<T> {
    fn set_text(&self, region: Region, value: &str) {
        (**self).set_text(region, value);
    }

    fn set_color(&self, region: Region, color: &str) {
        (**self).set_color(region, color);
    }

    fn set_visible(&self, region: Region, visible: bool) {
        (**self).set_visible(region, visible);
    }
}
