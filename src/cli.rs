//! Ligne de commande (natif seulement).
//!
//! - sans argument       : ouvre la fenêtre
//! - `--rejouer "7+3="`  : rejoue les touches sans fenêtre et imprime l’écran

use std::path::PathBuf;

use clap::Parser;

use crate::config::{CHEMIN_DEFAUT, VAR_CONFIG};
use crate::noyau::{format_affichage, ErreurTouche, EtatCalc, PolitiqueAffichage, Touche};

#[derive(Debug, Parser)]
#[command(name = "calculatrice", version, about = "Calculatrice de poche (egui)")]
pub struct Args {
    /// Fichier de configuration TOML (absent => valeurs par défaut)
    #[arg(long, env = VAR_CONFIG, default_value = CHEMIN_DEFAUT)]
    pub config: PathBuf,

    /// Suite de touches à rejouer sans fenêtre, ex. "12×3=" ou "5+2+="
    #[arg(long, value_name = "TOUCHES", allow_hyphen_values = true)]
    pub rejouer: Option<String>,
}

/// Rejoue une suite de touches depuis l’état initial et rend l’écran final.
pub fn rejouer(sequence: &str, politique: &PolitiqueAffichage) -> Result<String, ErreurTouche> {
    let touches = Touche::sequence(sequence)?;
    tracing::debug!(n = touches.len(), "rejeu");

    let etat = touches
        .into_iter()
        .fold(EtatCalc::default(), |etat, touche| etat.apres(touche));
    Ok(format_affichage(etat.affichage(), politique))
}
