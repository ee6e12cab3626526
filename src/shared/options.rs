//! Zentrale Konfiguration für den Kruskal-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::HitTestConfig;

// ── Selektion ───────────────────────────────────────────────────────

/// Abstand, ab dem ein Vertex einen Klick registriert.
pub const VERTEX_HIT_RADIUS: f32 = 12.0;
/// Abstand zur Kanten-Strecke, ab dem eine Kante einen Klick registriert.
pub const EDGE_HIT_WIDTH: f32 = 4.0;
/// Halbkante des Gewichts-Labels um den Kanten-Mittelpunkt.
pub const EDGE_LABEL_HALF_EXTENT: f32 = 10.0;

// ── Kanten ──────────────────────────────────────────────────────────

/// Startgewicht einer neu gezogenen Kante.
pub const DEFAULT_NEW_EDGE_WEIGHT: u32 = 0;
/// Gewichtsänderung pro Mausrad-Raste.
pub const WEIGHT_SCROLL_STEP: i32 = 1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `kruskal_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Selektion ───────────────────────────────────────────────
    /// Hit-Radius für Vertices
    pub vertex_hit_radius: f32,
    /// Hit-Breite für Kanten
    pub edge_hit_width: f32,
    /// Label-Bereich um den Kanten-Mittelpunkt (0 = deaktiviert)
    #[serde(default = "default_edge_label_half_extent")]
    pub edge_label_half_extent: f32,

    // ── Kanten ──────────────────────────────────────────────────
    /// Startgewicht neuer Kanten
    #[serde(default)]
    pub default_new_edge_weight: u32,
    /// Gewichtsänderung pro Mausrad-Raste
    #[serde(default = "default_weight_scroll_step")]
    pub weight_scroll_step: i32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            vertex_hit_radius: VERTEX_HIT_RADIUS,
            edge_hit_width: EDGE_HIT_WIDTH,
            edge_label_half_extent: EDGE_LABEL_HALF_EXTENT,
            default_new_edge_weight: DEFAULT_NEW_EDGE_WEIGHT,
            weight_scroll_step: WEIGHT_SCROLL_STEP,
        }
    }
}

/// Serde-Default für `edge_label_half_extent` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_edge_label_half_extent() -> f32 {
    EDGE_LABEL_HALF_EXTENT
}

fn default_weight_scroll_step() -> i32 {
    WEIGHT_SCROLL_STEP
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("kruskal_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("kruskal_editor.toml")
    }

    /// Schwellwerte für `Graph::nearest_selectable`.
    pub fn hit_test_config(&self) -> HitTestConfig {
        HitTestConfig {
            vertex_hit_radius: self.vertex_hit_radius,
            edge_hit_width: self.edge_hit_width,
            edge_label_half_extent: (self.edge_label_half_extent > 0.0)
                .then_some(self.edge_label_half_extent),
        }
    }
}
