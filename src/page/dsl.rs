use crate::{
    animation::{
        spring::Spring,
        table::InterpolationTable,
        transition::{Entrance, Transition, ViewportTrigger},
    },
    foundation::core::{Rect, Viewport},
    foundation::error::{ScrollfxError, ScrollfxResult},
    layer::style::StyleProperty,
    page::model::{
        LayerBinding, MotionConfig, NavLink, PAGE_VERSION, Page, SceneEmbed, Section,
    },
    scroll::offset::ScrollOffset,
};

pub struct PageBuilder {
    viewport: Viewport,
    tracked_region: Option<Rect>,
    offset: ScrollOffset,
    bindings: Vec<LayerBinding>,
    sections: Vec<Section>,
    nav: Vec<NavLink>,
    motion: MotionConfig,
}

impl PageBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            tracked_region: None,
            offset: ScrollOffset::default(),
            bindings: Vec::new(),
            sections: Vec::new(),
            nav: Vec::new(),
            motion: MotionConfig::default(),
        }
    }

    pub fn tracked_region(mut self, region: Rect) -> Self {
        self.tracked_region = Some(region);
        self
    }

    pub fn offset(mut self, offset: ScrollOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn bind(
        mut self,
        layer: impl Into<String>,
        property: StyleProperty,
        table: InterpolationTable,
    ) -> Self {
        self.bindings.push(LayerBinding {
            layer: layer.into(),
            property,
            table,
        });
        self
    }

    pub fn section(mut self, section: Section) -> ScrollfxResult<Self> {
        if self.sections.iter().any(|s| s.id == section.id) {
            return Err(ScrollfxError::validation(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        self.sections.push(section);
        Ok(self)
    }

    pub fn nav(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.nav.push(NavLink {
            label: label.into(),
            target: target.into(),
        });
        self
    }

    pub fn motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Track the union of all sections when no region was set explicitly.
    pub fn build(self) -> ScrollfxResult<Page> {
        let tracked_region = self.tracked_region.or_else(|| {
            self.sections
                .iter()
                .map(|s| s.region)
                .reduce(|a, b| a.union(b))
        });
        let page = Page {
            version: PAGE_VERSION.to_string(),
            viewport: self.viewport,
            tracked_region,
            offset: self.offset,
            bindings: self.bindings,
            sections: self.sections,
            nav: self.nav,
            motion: self.motion,
        };
        page.validate()?;
        Ok(page)
    }
}

/// Section builder helper; stacks sections vertically at full viewport width.
struct Stack {
    width: f64,
    y: f64,
}

impl Stack {
    fn next(&mut self, id: &str, title: &str, height: f64) -> Section {
        let region = Rect::new(0.0, self.y, self.width, self.y + height);
        self.y += height;
        Section {
            id: id.to_string(),
            overline: None,
            title: title.to_string(),
            subtitle: None,
            region,
            items: Vec::new(),
            reveal: None,
            entrance: None,
            scene: None,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Page {
    /// The reference landing page: a hero with a 3D scene, three card sections, a
    /// testimonial marquee and a contact form, with two parallax layers and a
    /// background fade bound to page scroll.
    pub fn landing() -> ScrollfxResult<Self> {
        let viewport = Viewport::new(1440.0, 900.0)?;
        let reveal = Some(ViewportTrigger::default());
        let mut stack = Stack {
            width: viewport.width,
            y: 0.0,
        };

        let mut hero = stack.next("hero", "Automate. Accelerate. Dominate.", 828.0);
        hero.subtitle = Some(
            "We build intelligent automations and AI voice agents that scale your business 10×."
                .to_string(),
        );
        hero.items = strings(&["headline", "lede", "actions", "highlights"]);
        hero.scene = Some(SceneEmbed {
            url: "https://prod.spline.design/4cHQr84zOGAHOehh/scene.splinecode".to_string(),
        });

        let mut about = stack.next("about", "Automation that moves like magic", 760.0);
        about.overline = Some("WHAT WE DO".to_string());
        about.items = strings(&["AI Voice Agents", "Lead Automation", "Workflow Intelligence"]);
        about.reveal = reveal;

        let mut why = stack.next("why", "Built for speed, precision, and scale", 720.0);
        why.overline = Some("WHY CHOOSE US".to_string());
        why.items = strings(&["Speed", "Precision", "Scalability", "Efficiency"]);
        why.reveal = reveal;

        let mut solutions = stack.next("solutions", "From first touch to full automation", 700.0);
        solutions.overline = Some("OUR SOLUTIONS".to_string());
        solutions.items = strings(&[
            "Lead Capture & Enrichment",
            "AI Call & SMS Agents",
            "Ops & Back-office Automation",
        ]);
        solutions.reveal = Some(ViewportTrigger {
            once: true,
            amount: 0.0,
        });
        // Each card springs in on its own, without a stagger.
        solutions.entrance = Some(Entrance {
            transition: Transition::Spring(Spring {
                stiffness: 120.0,
                damping: 15.0,
                mass: 1.0,
            }),
            stagger_s: 0.0,
            ..Entrance::default()
        });

        let mut testimonials = stack.next("testimonials", "What partners say", 620.0);
        testimonials.overline = Some("RESULTS".to_string());

        let contact = stack.next("contact", "Let’s design your automation roadmap", 760.0);
        let footer = stack.next("footer", "FLAMES.AI", 160.0);

        PageBuilder::new(viewport)
            .bind(
                "hero",
                StyleProperty::TranslateY,
                InterpolationTable::new([(0.0, 0.0), (1.0, -150.0)])?,
            )
            .bind(
                "ambient-glow",
                StyleProperty::TranslateY,
                InterpolationTable::new([(0.0, 0.0), (1.0, 100.0)])?,
            )
            .bind(
                "background",
                StyleProperty::Opacity,
                InterpolationTable::from_domain_range(&[0.0, 0.4, 1.0], &[1.0, 0.8, 0.6])?,
            )
            .section(hero)?
            .section(about)?
            .section(why)?
            .section(solutions)?
            .section(testimonials)?
            .section(contact)?
            .section(footer)?
            .nav("What We Do", "about")
            .nav("Why Us", "why")
            .nav("Solutions", "solutions")
            .nav("Testimonials", "testimonials")
            .nav("Contact", "contact")
            .build()
    }
}
