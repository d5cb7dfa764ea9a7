use crate::constants::*;
use crate::core::{Effect, Presentation, StatusTone};
use crate::dom;
use web_sys as web;

/// [`Presentation`] over the game page: text nodes, CSS classes and the fake
/// interstitial overlay.
pub struct DomPresentation {
    button: web::Element,
    timer: web::Element,
    status: web::HtmlElement,
    container: web::Element,
    body: web::HtmlElement,
    interstitial: web::Element,
}

impl DomPresentation {
    /// Look up every element the game drives. The interstitial starts hidden.
    pub fn bind(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let mut presentation = Self {
            button: dom::element_by_id(document, BUTTON_ID)?,
            timer: dom::element_by_id(document, TIMER_ID)?,
            status: dom::html_element_by_id(document, STATUS_ID)?,
            container: dom::query_element(document, CONTAINER_SELECTOR)?,
            body,
            interstitial: dom::element_by_id(document, INTERSTITIAL_ID)?,
        };
        presentation.hide_interstitial();
        Ok(presentation)
    }

    fn target_for(&self, effect: Effect) -> Option<(&web::Element, &'static str)> {
        let body: &web::Element = &self.body;
        match effect {
            Effect::Drift => Some((&self.button, CLASS_MOVING)),
            Effect::Shrink => Some((&self.button, CLASS_SHRINK)),
            Effect::PaletteFlash => Some((body, CLASS_PSYCHEDELIC)),
            Effect::ScreenShake => Some((&self.container, CLASS_SHAKE)),
            // routed through show/hide_interstitial
            Effect::Interstitial => None,
        }
    }
}

impl Presentation for DomPresentation {
    fn set_status_text(&mut self, text: &str) {
        self.status.set_text_content(Some(text));
    }

    fn set_status_tone(&mut self, tone: StatusTone) {
        let color = match tone {
            StatusTone::Normal => STATUS_COLOR_NORMAL,
            StatusTone::Failure => STATUS_COLOR_FAILURE,
        };
        _ = self.status.style().set_property("color", color);
    }

    fn set_timer_text(&mut self, text: &str) {
        self.timer.set_text_content(Some(text));
    }

    fn set_holding(&mut self, holding: bool) {
        dom::set_class(&self.button, CLASS_HOLDING, holding);
    }

    fn apply_effect(&mut self, effect: Effect) {
        match self.target_for(effect) {
            Some((el, class)) => dom::set_class(el, class, true),
            None => self.show_interstitial(),
        }
    }

    fn clear_effect(&mut self, effect: Effect) {
        match self.target_for(effect) {
            Some((el, class)) => dom::set_class(el, class, false),
            None => self.hide_interstitial(),
        }
    }

    // index.html ships the overlay with an inline `display:none`; keep it in step with the class.
    fn show_interstitial(&mut self) {
        dom::set_class(&self.interstitial, CLASS_HIDDEN, false);
        _ = self.interstitial.remove_attribute("style");
    }

    fn hide_interstitial(&mut self) {
        dom::set_class(&self.interstitial, CLASS_HIDDEN, true);
        _ = self.interstitial.set_attribute("style", "display: none");
    }
}
