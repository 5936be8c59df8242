//! Closed set of preset names and their catalog groupings.
//!
//! The catalog is a static table, so preset identity is a closed enum rather
//! than a runtime-allocated id: an invalid name is unrepresentable once it has
//! crossed [`PresetName::from_str`]. Wire names keep the original camelCase
//! spelling (`"bounceIn"`).

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Catalog groupings, in browsing order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Category {
    AttentionSeekers,
    BackEntrances,
    BackExits,
    BouncingEntrances,
    BouncingExits,
    FadingEntrances,
    FadingExits,
    Flippers,
    Lightspeed,
    RotatingEntrances,
    RotatingExits,
    Specials,
    ZoomingEntrances,
    ZoomingExits,
    SlidingEntrances,
    SlidingExits,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::AttentionSeekers,
        Category::BackEntrances,
        Category::BackExits,
        Category::BouncingEntrances,
        Category::BouncingExits,
        Category::FadingEntrances,
        Category::FadingExits,
        Category::Flippers,
        Category::Lightspeed,
        Category::RotatingEntrances,
        Category::RotatingExits,
        Category::Specials,
        Category::ZoomingEntrances,
        Category::ZoomingExits,
        Category::SlidingEntrances,
        Category::SlidingExits,
    ];

    /// Human-readable label as shown by the demo browser.
    pub fn label(self) -> &'static str {
        match self {
            Category::AttentionSeekers => "Attention Seekers",
            Category::BackEntrances => "Back Entrances",
            Category::BackExits => "Back Exits",
            Category::BouncingEntrances => "Bouncing Entrances",
            Category::BouncingExits => "Bouncing Exits",
            Category::FadingEntrances => "Fading Entrances",
            Category::FadingExits => "Fading Exits",
            Category::Flippers => "Flippers",
            Category::Lightspeed => "Lightspeed",
            Category::RotatingEntrances => "Rotating Entrances",
            Category::RotatingExits => "Rotating Exits",
            Category::Specials => "Specials",
            Category::ZoomingEntrances => "Zooming Entrances",
            Category::ZoomingExits => "Zooming Exits",
            Category::SlidingEntrances => "Sliding Entrances",
            Category::SlidingExits => "Sliding Exits",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

macro_rules! preset_names {
    ( $( $category:ident : $( $variant:ident = $wire:literal ),+ $(,)? ; )+ ) => {
        /// Every preset the catalog knows, grouped per [`Category`].
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum PresetName {
            $( $( $variant, )+ )+
        }

        impl PresetName {
            /// All names in catalog order.
            pub const ALL: &'static [PresetName] = &[
                $( $( PresetName::$variant, )+ )+
            ];

            /// The camelCase wire name (`"bounceInDown"`).
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $( PresetName::$variant => $wire, )+ )+
                }
            }

            pub fn category(self) -> Category {
                match self {
                    $( $( PresetName::$variant => Category::$category, )+ )+
                }
            }
        }

        impl FromStr for PresetName {
            type Err = MotionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $( $wire => Ok(PresetName::$variant), )+ )+
                    _ => Err(MotionError::unknown(s)),
                }
            }
        }
    };
}

preset_names! {
    AttentionSeekers:
        Bounce = "bounce",
        Flash = "flash",
        Pulse = "pulse",
        RubberBand = "rubberBand",
        ShakeX = "shakeX",
        ShakeY = "shakeY",
        HeadShake = "headShake",
        Swing = "swing",
        Tada = "tada",
        Wobble = "wobble",
        Jello = "jello",
        HeartBeat = "heartBeat";
    BackEntrances:
        BackInDown = "backInDown",
        BackInLeft = "backInLeft",
        BackInRight = "backInRight",
        BackInUp = "backInUp";
    BackExits:
        BackOutDown = "backOutDown",
        BackOutLeft = "backOutLeft",
        BackOutRight = "backOutRight",
        BackOutUp = "backOutUp";
    BouncingEntrances:
        BounceIn = "bounceIn",
        BounceInDown = "bounceInDown",
        BounceInLeft = "bounceInLeft",
        BounceInRight = "bounceInRight",
        BounceInUp = "bounceInUp";
    BouncingExits:
        BounceOut = "bounceOut",
        BounceOutDown = "bounceOutDown",
        BounceOutLeft = "bounceOutLeft",
        BounceOutRight = "bounceOutRight",
        BounceOutUp = "bounceOutUp";
    FadingEntrances:
        FadeIn = "fadeIn",
        FadeInDown = "fadeInDown",
        FadeInDownBig = "fadeInDownBig",
        FadeInLeft = "fadeInLeft",
        FadeInLeftBig = "fadeInLeftBig",
        FadeInRight = "fadeInRight",
        FadeInRightBig = "fadeInRightBig",
        FadeInUp = "fadeInUp",
        FadeInUpBig = "fadeInUpBig",
        FadeInTopLeft = "fadeInTopLeft",
        FadeInTopRight = "fadeInTopRight",
        FadeInBottomLeft = "fadeInBottomLeft",
        FadeInBottomRight = "fadeInBottomRight";
    FadingExits:
        FadeOut = "fadeOut",
        FadeOutDown = "fadeOutDown",
        FadeOutDownBig = "fadeOutDownBig",
        FadeOutLeft = "fadeOutLeft",
        FadeOutLeftBig = "fadeOutLeftBig",
        FadeOutRight = "fadeOutRight",
        FadeOutRightBig = "fadeOutRightBig",
        FadeOutUp = "fadeOutUp",
        FadeOutUpBig = "fadeOutUpBig",
        FadeOutTopLeft = "fadeOutTopLeft",
        FadeOutTopRight = "fadeOutTopRight",
        FadeOutBottomLeft = "fadeOutBottomLeft",
        FadeOutBottomRight = "fadeOutBottomRight";
    Flippers:
        Flip = "flip",
        FlipInX = "flipInX",
        FlipInY = "flipInY",
        FlipOutX = "flipOutX",
        FlipOutY = "flipOutY";
    Lightspeed:
        LightSpeedInLeft = "lightSpeedInLeft",
        LightSpeedInRight = "lightSpeedInRight",
        LightSpeedOutLeft = "lightSpeedOutLeft",
        LightSpeedOutRight = "lightSpeedOutRight";
    RotatingEntrances:
        RotateIn = "rotateIn",
        RotateInDownLeft = "rotateInDownLeft",
        RotateInDownRight = "rotateInDownRight",
        RotateInUpLeft = "rotateInUpLeft",
        RotateInUpRight = "rotateInUpRight";
    RotatingExits:
        RotateOut = "rotateOut",
        RotateOutDownLeft = "rotateOutDownLeft",
        RotateOutDownRight = "rotateOutDownRight",
        RotateOutUpLeft = "rotateOutUpLeft",
        RotateOutUpRight = "rotateOutUpRight";
    Specials:
        Hinge = "hinge",
        JackInTheBox = "jackInTheBox",
        RollIn = "rollIn",
        RollOut = "rollOut";
    ZoomingEntrances:
        ZoomIn = "zoomIn",
        ZoomInDown = "zoomInDown",
        ZoomInLeft = "zoomInLeft",
        ZoomInRight = "zoomInRight",
        ZoomInUp = "zoomInUp";
    ZoomingExits:
        ZoomOut = "zoomOut",
        ZoomOutDown = "zoomOutDown",
        ZoomOutLeft = "zoomOutLeft",
        ZoomOutRight = "zoomOutRight",
        ZoomOutUp = "zoomOutUp";
    SlidingEntrances:
        SlideInDown = "slideInDown",
        SlideInLeft = "slideInLeft",
        SlideInRight = "slideInRight",
        SlideInUp = "slideInUp";
    SlidingExits:
        SlideOutDown = "slideOutDown",
        SlideOutLeft = "slideOutLeft",
        SlideOutRight = "slideOutRight",
        SlideOutUp = "slideOutUp";
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PresetName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PresetName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_roundtrip() {
        for &name in PresetName::ALL {
            let parsed: PresetName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "doesNotExist".parse::<PresetName>().unwrap_err();
        assert_eq!(err, MotionError::unknown("doesNotExist"));
    }

    #[test]
    fn every_category_is_populated() {
        for &cat in Category::ALL {
            assert!(
                PresetName::ALL.iter().any(|n| n.category() == cat),
                "empty category {cat:?}"
            );
        }
    }
}
