use std::rc::Rc;

use web_sys::{window, Document, Element};

use crate::behaviors;
use crate::components::analytics::AnalyticsPreview;
use crate::components::navbar::{Navbar, NavbarProps};
use crate::config::AppConfig;
use crate::dashboard::preview::{DashboardPreview, DashboardPreviewProps};
use crate::dashboard::templates::TemplateRegistry;
use crate::error::SiteError;
use crate::motion::observer::{RevealHandle, RevealObserver};
use crate::motion::strategy::MotionBackend;
use crate::pricing::plans::{builtin_plans, Plan};
use crate::pricing::section::{PricingSection, PricingSectionProps};
use crate::theme;

pub const BRAND: &str = "Dashcraft";

/// Page areas that get a Yew root when their mount element exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Navigation,
    Dashboard,
    Analytics,
    Pricing,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::Navigation,
        Region::Dashboard,
        Region::Analytics,
        Region::Pricing,
    ];

    pub fn root_id(self) -> &'static str {
        match self {
            Region::Navigation => "site-nav",
            Region::Dashboard => "dashboard-preview",
            Region::Analytics => "analytics-demo",
            Region::Pricing => "pricing-plans",
        }
    }

    /// Regions whose root id resolves, in mount order.
    pub fn present(resolves: impl Fn(&str) -> bool) -> Vec<Region> {
        Self::ALL
            .into_iter()
            .filter(|region| resolves(region.root_id()))
            .collect()
    }
}

/// Owns everything shared between regions for the lifetime of the page.
pub struct PageController {
    config: AppConfig,
    document: Document,
    backend: Rc<dyn MotionBackend>,
    reveal: RevealHandle,
    registry: Option<Rc<TemplateRegistry>>,
    plans: Option<Vec<Plan>>,
}

impl PageController {
    pub fn new(config: AppConfig) -> Result<Self, SiteError> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or(SiteError::NoWindow)?;
        let backend = config.motion.backend();
        let reveal = RevealHandle(Rc::new(RevealObserver::new(backend.clone())?));

        let registry = match TemplateRegistry::builtin() {
            Ok(registry) => Some(Rc::new(registry)),
            Err(e) => {
                log::error!("dashboard templates failed to load: {}", e);
                None
            }
        };
        let plans = match builtin_plans() {
            Ok(plans) => Some(plans),
            Err(e) => {
                log::error!("pricing plans failed to load: {}", e);
                None
            }
        };

        Ok(Self {
            config,
            document,
            backend,
            reveal,
            registry,
            plans,
        })
    }

    /// Applies the theme, mounts every present region and installs the
    /// page-wide behaviors.
    pub fn bind(self) {
        theme::init();

        let present = Region::present(|id| self.document.get_element_by_id(id).is_some());
        for region in Region::ALL {
            if !present.contains(&region) {
                log::debug!("#{} not on this page, {:?} left unbound", region.root_id(), region);
                continue;
            }
            if let Some(root) = self.document.get_element_by_id(region.root_id()) {
                self.mount(region, root);
            }
        }

        self.install_behaviors();
        log::info!(
            "page bound: {} region(s), {} motion",
            present.len(),
            self.backend.name()
        );

        // Closures handed to the browser hold clones of these; the controller
        // itself is never torn down.
        std::mem::forget(self);
    }

    fn mount(&self, region: Region, root: Element) {
        match region {
            Region::Navigation => {
                yew::Renderer::<Navbar>::with_root_and_props(
                    root,
                    NavbarProps {
                        brand: BRAND.into(),
                        links: crate::components::navbar::default_links(),
                    },
                )
                .render();
            }
            Region::Dashboard => match &self.registry {
                Some(registry) => {
                    yew::Renderer::<DashboardPreview>::with_root_and_props(
                        root,
                        DashboardPreviewProps {
                            registry: registry.clone(),
                        },
                    )
                    .render();
                }
                None => log::warn!("dashboard preview skipped, no templates"),
            },
            Region::Analytics => {
                yew::Renderer::<AnalyticsPreview>::with_root(root).render();
            }
            Region::Pricing => match &self.plans {
                Some(plans) => {
                    yew::Renderer::<PricingSection>::with_root_and_props(
                        root,
                        PricingSectionProps {
                            plans: plans.clone(),
                            currency: self.config.currency,
                            reveal: self.reveal.clone(),
                        },
                    )
                    .render();
                }
                None => log::warn!("pricing section skipped, no plans"),
            },
        }
        log::debug!("mounted {:?}", region);
    }

    fn install_behaviors(&self) {
        let document = &self.document;
        let results = [
            ("pulse keyframes", behaviors::inject_pulse_keyframes(document)),
            (
                "smooth scroll",
                behaviors::smooth_scroll_anchors(document, self.backend.clone()),
            ),
            ("demo button", behaviors::demo_button(document, self.backend.clone())),
            ("hover lift", behaviors::hover_lift(document)),
            (
                "press feedback",
                behaviors::press_feedback(document).map(|count| {
                    log::debug!("press feedback on {} button(s)", count);
                }),
            ),
        ];
        for (name, result) in results {
            if let Err(e) = result {
                log::warn!("{} not installed: {}", name, e);
            }
        }

        behaviors::hero_entrance(document, self.backend.clone());
        behaviors::reveal_static(&self.reveal.0);
        behaviors::page_fade_in(document);
    }
}
