// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::governors::Governors;

/// Token attributes a renderer may surface under the token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "t")]
    Text,
    #[serde(rename = "lemma")]
    Lemma,
    #[serde(rename = "cat")]
    Category,
    #[serde(rename = "xpos")]
    ExtendedPos,
    #[serde(rename = "morph")]
    Morphology,
    #[serde(rename = "gloss")]
    Gloss,
}

impl Feature {
    pub const DEFAULT_SHOWN: [Self; 4] = [Self::Text, Self::Category, Self::Lemma, Self::Gloss];

    /// CSS class used for the feature row of this attribute.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Text => "token",
            Self::Lemma => "lemma",
            Self::Category => "postag",
            Self::ExtendedPos => "xpos",
            Self::Morphology => "morph",
            Self::Gloss => "gloss",
        }
    }
}

/// Horizontal placement filled in by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f64,
    pub width: f64,
}

impl Placement {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    id: SmolStr,
    text: SmolStr,
    lemma: SmolStr,
    category: SmolStr,
    #[serde(skip_serializing_if = "Option::is_none")]
    xpos: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    morph: Option<SmolStr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gloss: Option<SmolStr>,
    space_after: bool,
    governors: Governors,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
}

impl Token {
    pub fn new(
        id: impl Into<SmolStr>,
        text: impl Into<SmolStr>,
        lemma: impl Into<SmolStr>,
        category: impl Into<SmolStr>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            lemma: lemma.into(),
            category: category.into(),
            xpos: None,
            morph: None,
            gloss: None,
            space_after: true,
            governors: Governors::default(),
            placement: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn xpos(&self) -> Option<&str> {
        self.xpos.as_deref()
    }

    pub fn set_xpos<T: Into<SmolStr>>(&mut self, xpos: Option<T>) {
        self.xpos = xpos.map(Into::into);
    }

    pub fn morph(&self) -> Option<&str> {
        self.morph.as_deref()
    }

    pub fn set_morph<T: Into<SmolStr>>(&mut self, morph: Option<T>) {
        self.morph = morph.map(Into::into);
    }

    pub fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }

    pub fn set_gloss<T: Into<SmolStr>>(&mut self, gloss: Option<T>) {
        self.gloss = gloss.map(Into::into);
    }

    /// `false` when the annotation carried the `SpaceAfter=No` marker.
    pub fn space_after(&self) -> bool {
        self.space_after
    }

    pub fn set_space_after(&mut self, space_after: bool) {
        self.space_after = space_after;
    }

    pub fn governors(&self) -> &Governors {
        &self.governors
    }

    pub fn governors_mut(&mut self) -> &mut Governors {
        &mut self.governors
    }

    /// Only available once the token went through the layout engine.
    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub(crate) fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Numeric sequence position encoded in the id (`3`, `5.1`), if any.
    pub fn position(&self) -> Option<f64> {
        numeric_id(&self.id)
    }

    pub fn feature(&self, feature: Feature) -> Option<&str> {
        match feature {
            Feature::Text => Some(self.text()),
            Feature::Lemma => Some(self.lemma()),
            Feature::Category => Some(self.category()),
            Feature::ExtendedPos => self.xpos(),
            Feature::Morphology => self.morph(),
            Feature::Gloss => self.gloss(),
        }
    }

    /// Morphology carrying `highlight=` marks the token for emphasis.
    pub fn is_highlighted(&self) -> bool {
        self.morph().is_some_and(|morph| morph != "_" && morph.contains("highlight="))
    }

    /// Highlighted tokens whose morphology also says `dephighlight` emphasize their incoming arcs.
    pub fn highlights_dependencies(&self) -> bool {
        self.is_highlighted() && self.morph().is_some_and(|morph| morph.contains("dephighlight"))
    }
}

pub(crate) fn numeric_id(id: &str) -> Option<f64> {
    id.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
