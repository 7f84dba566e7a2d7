//! Machine à états de la calculatrice de poche.
//!
//! Quatre champs, rien d’autre :
//! - `affichage`         : ce qui est à l’écran, aussi l’opérande en cours de saisie
//! - `valeur_precedente` : opérande gauche d’une opération en attente
//! - `operation`         : opérateur en attente d’un second opérande
//! - `attente_operande`  : vrai juste après un opérateur ou "=" (le prochain chiffre remplace)
//!
//! Contrats :
//! - `operation` présent => `valeur_precedente` présent.
//! - Aucune erreur : Infinity / NaN s’affichent tels quels.
//! - Évaluation gauche à droite, sans priorité (5 + 2 × 3 = 21).

use serde::{Deserialize, Serialize};

use super::erreur::ErreurTouche;
use super::nombre::{ecrire_nombre, lire_nombre};
use super::operateur::Operateur;
use super::touche::Touche;

/// Chiffre 0..=9 d’une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chiffre(u8);

impl Chiffre {
    /// 0, 1, …, 9 (indice = valeur).
    pub const TOUS: [Chiffre; 10] = [
        Chiffre(0),
        Chiffre(1),
        Chiffre(2),
        Chiffre(3),
        Chiffre(4),
        Chiffre(5),
        Chiffre(6),
        Chiffre(7),
        Chiffre(8),
        Chiffre(9),
    ];

    pub fn depuis_char(c: char) -> Result<Self, ErreurTouche> {
        c.to_digit(10)
            .map(|d| Chiffre(d as u8))
            .ok_or(ErreurTouche::ChiffreInvalide(c))
    }

    pub fn valeur(self) -> u8 {
        self.0
    }

    pub fn caractere(self) -> char {
        char::from(b'0' + self.0)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EtatCalc {
    affichage: String,
    valeur_precedente: Option<f64>,
    operation: Option<Operateur>,
    attente_operande: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            valeur_precedente: None,
            operation: None,
            attente_operande: false,
        }
    }
}

/// Égalité d’états : la valeur précédente est comparée bit à bit (NaN == NaN).
impl PartialEq for EtatCalc {
    fn eq(&self, autre: &Self) -> bool {
        self.affichage == autre.affichage
            && self.valeur_precedente.map(f64::to_bits) == autre.valeur_precedente.map(f64::to_bits)
            && self.operation == autre.operation
            && self.attente_operande == autre.attente_operande
    }
}

impl EtatCalc {
    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn valeur_precedente(&self) -> Option<f64> {
        self.valeur_precedente
    }

    pub fn operation(&self) -> Option<Operateur> {
        self.operation
    }

    pub fn attente_operande(&self) -> bool {
        self.attente_operande
    }

    /// Libellé de la touche d’effacement : "AC" au repos, "C" sinon.
    ///
    /// Une valeur précédente nulle ou NaN compte comme "au repos".
    pub fn libelle_effacement(&self) -> &'static str {
        let precedente_active = self
            .valeur_precedente
            .is_some_and(|v| v != 0.0 && !v.is_nan());

        if self.affichage != "0" || self.operation.is_some() || precedente_active {
            "C"
        } else {
            "AC"
        }
    }

    /* ------------------------ Touches ------------------------ */

    /// Une touche = une transition.
    pub fn appuyer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Virgule => self.saisir_virgule(),
            Touche::Operateur(op) => self.appliquer_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Pourcentage => self.pourcentage(),
            Touche::Signe => self.changer_signe(),
            Touche::Effacer => self.effacer(),
        }

        tracing::trace!(
            %touche,
            affichage = %self.affichage,
            precedente = ?self.valeur_precedente,
            operation = ?self.operation,
            attente = self.attente_operande,
            "transition"
        );
    }

    /// Forme pure : état suivant, sans toucher à l’état courant.
    pub fn apres(&self, touche: Touche) -> Self {
        let mut suivant = self.clone();
        suivant.appuyer(touche);
        suivant
    }

    /// Chiffre : remplace l’écran (nouvel opérande ou "0"), sinon s’ajoute à la fin.
    /// Aucune borne de longueur ici (la troncature est faite au rendu).
    pub fn saisir_chiffre(&mut self, chiffre: Chiffre) {
        if self.attente_operande {
            self.affichage = chiffre.caractere().to_string();
            self.attente_operande = false;
        } else if self.affichage == "0" {
            self.affichage = chiffre.caractere().to_string();
        } else {
            self.affichage.push(chiffre.caractere());
        }
    }

    /// Virgule : au plus une par opérande.
    pub fn saisir_virgule(&mut self) {
        if self.attente_operande {
            self.affichage = "0.".to_string();
            self.attente_operande = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// AC / C : retour à l’état initial.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// Opérateur binaire.
    ///
    /// - Premier opérande : on le capture, rien n’est calculé.
    /// - Opération déjà en attente : évaluation immédiate (chaînage gauche à droite),
    ///   le résultat devient l’opérande gauche. Une valeur précédente NaN compte pour 0.
    pub fn appliquer_operateur(&mut self, op: Operateur) {
        let saisie = lire_nombre(&self.affichage);

        match (self.valeur_precedente, self.operation) {
            (None, _) => {
                self.valeur_precedente = Some(saisie);
            }
            (Some(precedente), Some(en_attente)) => {
                let gauche = if precedente.is_nan() { 0.0 } else { precedente };
                let resultat = en_attente.appliquer(gauche, saisie);
                self.poser_resultat(resultat);
                self.valeur_precedente = Some(resultat);
            }
            (Some(_), None) => {}
        }

        self.operation = Some(op);
        self.attente_operande = true;
    }

    /// "=" : évalue l’opération en attente, puis l’oublie.
    /// Sans opération en attente (ou "=" répété) : aucun effet.
    pub fn egal(&mut self) {
        let (Some(precedente), Some(op)) = (self.valeur_precedente, self.operation) else {
            return;
        };

        let resultat = op.appliquer(precedente, lire_nombre(&self.affichage));
        self.poser_resultat(resultat);
        self.valeur_precedente = None;
        self.operation = None;
        self.attente_operande = true;
    }

    /// % : divise la valeur affichée par 100, quel que soit le contexte.
    pub fn pourcentage(&mut self) {
        self.affichage = ecrire_nombre(lire_nombre(&self.affichage) / 100.0);
    }

    /// ± : change le signe de la valeur affichée.
    pub fn changer_signe(&mut self) {
        self.affichage = ecrire_nombre(lire_nombre(&self.affichage) * -1.0);
    }

    fn poser_resultat(&mut self, resultat: f64) {
        if !resultat.is_finite() {
            tracing::debug!(resultat, "résultat non fini affiché tel quel");
        }
        self.affichage = ecrire_nombre(resultat);
    }
}
