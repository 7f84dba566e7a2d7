//! Noyau de la calculatrice de poche
//!
//! Organisation interne :
//! - machine.rs   : machine à états (affichage, opérande gauche, opérateur, attente)
//! - operateur.rs : + − × ÷ en f64
//! - touche.rs    : touches du pavé + lecture texte
//! - nombre.rs    : conversions nombre <-> texte (politique explicite)
//! - format.rs    : rendu de l’écran (exponentielle au-delà de 9 caractères)
//! - erreur.rs    : erreurs aux frontières

pub mod erreur;
pub mod format;
pub mod machine;
pub mod nombre;
pub mod operateur;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use erreur::ErreurTouche;
pub use format::{format_affichage, PolitiqueAffichage};
pub use machine::{Chiffre, EtatCalc};
pub use operateur::Operateur;
pub use touche::Touche;
