//! Erreurs du noyau.
//!
//! La machine à états elle-même ne produit jamais d’erreur : une division par zéro
//! donne `Infinity`/`NaN` à l’affichage. Les seules erreurs vivent à la frontière,
//! quand un texte (clavier, ligne de commande) doit devenir une touche.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    /// Symbole qui ne correspond à aucune touche du pavé.
    #[error("touche inconnue : {0:?}")]
    Inconnue(String),

    /// Valeur hors 0..=9 pour une touche chiffre.
    #[error("chiffre invalide : {0:?}")]
    ChiffreInvalide(char),

    /// Symbole d’opérateur non reconnu (y compris "=", qui n’est pas un opérateur binaire).
    #[error("opérateur inconnu : {0:?}")]
    OperateurInconnu(String),
}
