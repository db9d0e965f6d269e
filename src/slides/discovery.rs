//! Reconstructs the ordered slide sequence from tagged scene objects.
//!
//! Authoring uses flat discovery: every slide-tagged object in host
//! enumeration order. Playback uses sectioned discovery: sections sorted by
//! ordinal name (ties keep enumeration order), each contributing its direct
//! slide-tagged children in child order.

use super::SlideDeck;
use crate::error::LociError;
use crate::mode::PresentationMode;
use crate::options::DiscoveryOptions;
use crate::scene::{ObjectId, SceneHost};

/// Build the deck for `mode`.
///
/// Sectioned discovery disables the cameras of the slides it finds when
/// `options.disable_slide_cameras` is set. It fails with
/// [`LociError::NoSections`] when slides exist but no section does; an
/// empty scene yields an empty deck.
pub fn discover<H: SceneHost + ?Sized>(
    host: &mut H,
    options: &DiscoveryOptions,
    mode: PresentationMode,
) -> Result<SlideDeck, LociError> {
    let deck = if mode.is_sectioned() {
        discover_sectioned(host, options)?
    } else {
        discover_flat(host, options)
    };
    log::info!("discovered {} slide(s) ({mode})", deck.len());
    Ok(deck)
}

/// Every slide-tagged object in host enumeration order.
pub fn discover_flat<H: SceneHost + ?Sized>(
    host: &H,
    options: &DiscoveryOptions,
) -> SlideDeck {
    SlideDeck::new(host.find_tagged(&options.slide_tag))
}

/// Slides grouped by sorted sections.
pub fn discover_sectioned<H: SceneHost + ?Sized>(
    host: &mut H,
    options: &DiscoveryOptions,
) -> Result<SlideDeck, LociError> {
    let sections = sorted_sections(host, options);
    if sections.is_empty() {
        let tagged_slides = host.find_tagged(&options.slide_tag).len();
        if tagged_slides > 0 {
            return Err(LociError::NoSections { tagged_slides });
        }
        return Ok(SlideDeck::empty());
    }

    let mut slides = Vec::new();
    for section in sections {
        slides.extend(
            host.children(section)
                .into_iter()
                .filter(|&child| host.has_tag(child, &options.slide_tag)),
        );
    }

    if options.disable_slide_cameras {
        for &slide in &slides {
            if let Some(camera) = host.camera_mut(slide) {
                camera.enabled = false;
            }
        }
    }

    Ok(SlideDeck::new(slides))
}

/// Section objects ordered by `(name, enumeration index)`. Byte-wise name
/// comparison; missing names sort as the empty string.
fn sorted_sections<H: SceneHost + ?Sized>(
    host: &H,
    options: &DiscoveryOptions,
) -> Vec<ObjectId> {
    let mut sections: Vec<(usize, ObjectId)> = host
        .find_tagged(&options.section_tag)
        .into_iter()
        .enumerate()
        .collect();
    sections.sort_by(|(ia, a), (ib, b)| {
        let name_a = host.name(*a).unwrap_or_default().as_bytes();
        let name_b = host.name(*b).unwrap_or_default().as_bytes();
        name_a.cmp(name_b).then(ia.cmp(ib))
    });
    sections.into_iter().map(|(_, id)| id).collect()
}
