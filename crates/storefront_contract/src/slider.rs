//! Autonomous hero slider rotation.

use crate::{error::WidgetSetupError, surface::SlideDeck};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Position of the active slide within the deck.
pub struct SlideIndex(pub usize);

/// Index that follows `current` in a circular deck of `count` slides.
///
/// `count` must be non-zero.
pub fn next_slide_index(current: SlideIndex, count: usize) -> SlideIndex {
    SlideIndex((current.0 + 1) % count)
}

#[derive(Debug)]
/// Owns the slide index for one page's slider.
///
/// The controller is driven from outside: the page installer calls [`SliderController::advance`]
/// from a recurring timer.
pub struct SliderController<D> {
    deck: D,
    count: usize,
    current: SlideIndex,
}

impl<D: SlideDeck> SliderController<D> {
    /// Marks the first slide active, clears the marker from the rest, and takes ownership of
    /// the deck.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetSetupError::NoSlides`] for an empty deck and
    /// [`WidgetSetupError::Dom`] when a marker cannot be updated.
    pub fn start(deck: D, selector: &str) -> Result<Self, WidgetSetupError> {
        let count = deck.slide_count();
        if count == 0 {
            return Err(WidgetSetupError::NoSlides {
                selector: selector.to_string(),
            });
        }
        for index in 0..count {
            deck.set_slide_active(index, index == 0).map_err(WidgetSetupError::Dom)?;
        }
        Ok(Self {
            deck,
            count,
            current: SlideIndex(0),
        })
    }

    /// Deactivates the current slide and activates the next one, wrapping after the last.
    ///
    /// The index moves forward even if a marker update fails, so the rotation keeps its cadence.
    ///
    /// # Errors
    ///
    /// Returns the first deck error encountered.
    pub fn advance(&mut self) -> Result<SlideIndex, String> {
        let previous = self.current;
        self.current = next_slide_index(previous, self.count);
        let deactivated = self.deck.set_slide_active(previous.0, false);
        let activated = self.deck.set_slide_active(self.current.0, true);
        deactivated.and(activated).map(|()| self.current)
    }

    /// Index of the slide currently marked active.
    pub fn active_index(&self) -> SlideIndex {
        self.current
    }
}
