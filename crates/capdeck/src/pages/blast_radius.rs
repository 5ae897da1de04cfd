//! Page 6: hijacker blast radius.

use capdeck_core::{
    draw::{Align, LabelBox, Note},
    geometry::{Point, Size},
    style::StyleRegistry,
};

use super::{muted, tint};
use crate::{
    error::ComposeError,
    page::{Page, PageBuilder},
};

pub(super) fn compose(styles: &StyleRegistry) -> Result<Page, ComposeError> {
    let mut page = PageBuilder::new(
        "HIJACKER BLAST RADIUS",
        Some("What happens when an agent is fully compromised"),
        styles,
    )?;

    let agent = page.resolve("agent")?;
    let allow = page.resolve("allow")?;
    let deny = page.resolve("deny")?;
    let trusted = page.resolve("trusted-zone")?;
    let untrusted = page.resolve("untrusted-zone")?;
    let insight = page.resolve("insight")?;

    page.draw_box(LabelBox::new(
        Point::new(0.05, 0.72),
        Size::new(0.40, 0.08),
        "HIJACKER TAKES OVER AGENT",
        agent,
    ))?;

    // What the hijacker gains
    page.draw_box(
        LabelBox::new(Point::new(0.05, 0.38), Size::new(0.40, 0.32), "", trusted)
            .with_opacity(0.8),
    )?;
    page.draw_note(
        Note::new(Point::new(0.25, 0.685), "HAS ACCESS TO:", 11.0, allow.fill()).bold(),
    )?;

    let has_items = [
        "Agent's Ed25519 keypair",
        "Knowledge of proxy API address",
        "Knowledge of capability ID",
    ];
    for (i, item) in has_items.iter().enumerate() {
        page.draw_note(
            Note::new(
                Point::new(0.08, 0.63 - i as f32 * 0.06),
                format!("✓  {item}"),
                10.0,
                allow.fill(),
            )
            .bold()
            .with_align(Align::Left),
        )?;
    }

    page.draw_note(Note::new(Point::new(0.25, 0.44), "CAN DO:", 10.0, allow.fill()).bold())?;
    page.draw_note(
        Note::new(
            Point::new(0.08, 0.40),
            "✓  Send requests to proxy",
            9.0,
            allow.fill(),
        )
        .with_align(Align::Left),
    )?;

    // What stays out of reach
    page.draw_box(
        LabelBox::new(Point::new(0.52, 0.38), Size::new(0.43, 0.32), "", untrusted)
            .with_opacity(0.8),
    )?;
    page.draw_note(
        Note::new(Point::new(0.735, 0.685), "CANNOT ACCESS:", 11.0, deny.fill()).bold(),
    )?;

    let no_items = [
        "Merchant / service credentials",
        "Issuer signing key",
        "Other agents' keys",
        "Direct access to merchant API",
        "Proxy internal state",
        "Revocation controls",
    ];
    for (i, item) in no_items.iter().enumerate() {
        page.draw_note(
            Note::new(
                Point::new(0.55, 0.63 - i as f32 * 0.05),
                format!("✗  {item}"),
                9.0,
                deny.fill(),
            )
            .bold()
            .with_align(Align::Left),
        )?;
    }

    page.draw_note(Note::new(Point::new(0.735, 0.44), "CANNOT DO:", 10.0, deny.fill()).bold())?;

    let cannot_do = [
        "Buy blocked categories",
        "Exceed budget limit",
        "Use unauthorized vendors",
        "Act after revocation",
        "Forge new capabilities",
        "Escalate privileges",
    ];
    for (i, item) in cannot_do.iter().enumerate() {
        page.draw_note(
            Note::new(
                Point::new(0.55, 0.40 - i as f32 * 0.04),
                format!("✗  {item}"),
                8.0,
                deny.fill(),
            )
            .with_align(Align::Left),
        )?;
    }

    page.draw_box(
        LabelBox::new(Point::new(0.10, 0.08), Size::new(0.80, 0.14), "", insight)
            .with_opacity(0.95),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.19),
            "WORST CASE SCENARIO",
            14.0,
            insight.text(),
        )
        .bold(),
    )?;
    page.draw_note(Note::new(
        Point::new(0.50, 0.15),
        "Hijacker can spend the remaining budget on allowed items at allowed vendors.",
        11.0,
        muted()?,
    ))?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.115),
            "That's it. The blast radius IS the capability. User hits revoke → game over.",
            11.0,
            insight.text(),
        )
        .bold(),
    )?;
    page.draw_note(
        Note::new(
            Point::new(0.50, 0.085),
            "Compare: Traditional approach (shared credentials) → hijacker has FULL ACCESS to everything.",
            9.0,
            tint("#9E9E9E")?,
        )
        .italic(),
    )?;

    Ok(page.finish())
}
