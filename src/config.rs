//! Configuration (optionnelle) en TOML.
//!
//! ```toml
//! [affichage]
//! longueur_max = 9        # au-delà : notation exponentielle
//! chiffres_exposant = 3   # chiffres après la virgule en exponentielle
//!
//! [fenetre]
//! largeur = 340.0
//! hauteur = 560.0
//! ```
//!
//! Fichier absent => valeurs par défaut. Fichier présent mais invalide => erreur.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noyau::PolitiqueAffichage;

/// Chemin utilisé si ni `--config` ni la variable d’environnement ne sont fournis.
pub const CHEMIN_DEFAUT: &str = "calculatrice.toml";

/// Variable d’environnement pointant vers le fichier de configuration.
pub const VAR_CONFIG: &str = "CALCULATRICE_CONFIG";

/// Borne de toExponential : 0..=100 chiffres après la virgule.
const CHIFFRES_EXPOSANT_MAX: usize = 100;

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin:?} impossible")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("TOML invalide")]
    Toml(#[from] toml::de::Error),

    #[error("valeur invalide pour {champ} : {raison}")]
    Invalide { champ: &'static str, raison: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fenetre {
    pub largeur: f32,
    pub hauteur: f32,
}

impl Default for Fenetre {
    fn default() -> Self {
        Self {
            largeur: 340.0,
            hauteur: 560.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub affichage: PolitiqueAffichage,
    pub fenetre: Fenetre,
}

impl Config {
    /// Lecture + validation d’un texte TOML.
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurConfig> {
        let config: Config = toml::from_str(texte)?;
        config.valider()?;
        Ok(config)
    }

    /// Charge le fichier ; absent => défauts.
    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = match fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(?chemin, "pas de fichier de configuration, valeurs par défaut");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ErreurConfig::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::depuis_toml(&texte)?;
        tracing::info!(?chemin, ?config, "configuration chargée");
        Ok(config)
    }

    /// Garde-fous : bornes de la politique d’affichage et taille de fenêtre.
    pub fn valider(&self) -> Result<(), ErreurConfig> {
        if self.affichage.longueur_max == 0 {
            return Err(ErreurConfig::Invalide {
                champ: "affichage.longueur_max",
                raison: "doit être au moins 1".into(),
            });
        }
        if self.affichage.chiffres_exposant > CHIFFRES_EXPOSANT_MAX {
            return Err(ErreurConfig::Invalide {
                champ: "affichage.chiffres_exposant",
                raison: format!("au plus {CHIFFRES_EXPOSANT_MAX}"),
            });
        }
        for (champ, v) in [
            ("fenetre.largeur", self.fenetre.largeur),
            ("fenetre.hauteur", self.fenetre.hauteur),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(ErreurConfig::Invalide {
                    champ,
                    raison: format!("{v} n’est pas une taille positive"),
                });
            }
        }
        Ok(())
    }
}
