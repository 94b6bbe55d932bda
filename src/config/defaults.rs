// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Layout**: resize debounce and scroll offsets
//! - **Carousel**: autoplay cadence, swipe threshold, card gap
//! - **Accordion**: deep-link and scroll-into-view delays
//! - **Contact**: WhatsApp target, message length, reset delay
//! - **Reveal**: stagger steps and animation durations
//! - **Notifications**: banner lifetime

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Debounce applied to window resize events before re-layout (ms).
pub const RESIZE_DEBOUNCE_MS: u64 = 250;

/// Scroll offset past which the navigation bar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD_PX: f32 = 100.0;

/// Extra space kept above a section when scrolling to an anchor.
pub const ANCHOR_SCROLL_MARGIN_PX: f32 = 20.0;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Time between two autoplay advances (ms).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Grace period after a manual navigation before autoplay resumes (ms).
pub const DEFAULT_RESUME_DELAY_MS: u64 = 5000;

/// Minimum horizontal travel that counts as a swipe (px).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Horizontal gap between two carousel cards (px).
pub const DEFAULT_CARD_GAP_PX: f32 = 30.0;

/// Lower bound for the autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Upper bound for the autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Accordion Defaults
// ==========================================================================

/// Delay before a deep-linked panel opens (ms).
pub const DEFAULT_DEEP_LINK_DELAY_MS: u64 = 500;

/// Delay between opening a panel and scrolling it into view (ms).
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 300;

/// Duration of the panel height animation (ms).
pub const PANEL_ANIMATION_MS: u64 = 300;

/// Fade-out duration before a filtered panel is hidden (ms).
pub const FILTER_FADE_MS: u64 = 300;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// WhatsApp number receiving consultations (country code included).
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5575991804444";

/// E-mail address used by the footer link.
pub const DEFAULT_CONTACT_EMAIL: &str = "eric_luiz7@hotmail.com";

/// Characters of the free-text message kept in the WhatsApp text.
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 1500;

/// Delay between a successful submission and the form reset (ms).
pub const DEFAULT_FORM_RESET_DELAY_MS: u64 = 2000;

/// Minimum digits for a WhatsApp number with area code.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Delay before the consultation CTA fills the message placeholder (ms).
pub const CTA_FOCUS_DELAY_MS: u64 = 800;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Per-index stagger of stat badges (ms).
pub const BADGE_STAGGER_MS: u64 = 200;

/// Per-index stagger of form groups (ms).
pub const FORM_GROUP_STAGGER_MS: u64 = 100;

/// Per-index stagger of timeline markers (ms).
pub const MARKER_STAGGER_MS: u64 = 300;

/// Duration of the timeline marker pulse (ms).
pub const MARKER_PULSE_MS: u64 = 300;

/// Per-index stagger of accordion items (ms).
pub const ACCORDION_ITEM_STAGGER_MS: u64 = 100;

/// Total duration of the counter animation (ms).
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Frame interval of the counter animation (ms).
pub const COUNTER_FRAME_MS: u64 = 16;

/// Delay before distribution bars start growing (ms).
pub const BAR_GROW_DELAY_MS: u64 = 200;

/// Duration of the distribution bar growth (ms).
pub const BAR_GROW_DURATION_MS: u64 = 1500;

/// Delay before the hero becomes visible (ms).
pub const HERO_REVEAL_DELAY_MS: u64 = 300;

/// Delay before the floating WhatsApp button appears (ms).
pub const FLOATING_BUTTON_DELAY_MS: u64 = 1000;

/// Period between two floating button pulses (ms).
pub const FLOATING_PULSE_PERIOD_MS: u64 = 10_000;

/// Duration of one floating button pulse (ms).
pub const FLOATING_PULSE_DURATION_MS: u64 = 2000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Lifetime of a notification banner before auto-dismiss (ms).
pub const DEFAULT_NOTIFICATION_DISMISS_MS: u64 = 8000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_MAX_MESSAGE_CHARS > 0);
    assert!(FLOATING_PULSE_DURATION_MS < FLOATING_PULSE_PERIOD_MS);
    assert!(COUNTER_FRAME_MS < COUNTER_DURATION_MS);
};
