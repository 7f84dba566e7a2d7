// src/noyau/touche.rs
//
// Touches du pavé + lecture depuis du texte (clavier PC, ligne de commande).
//
// Symboles acceptés :
//   0-9            chiffres
//   . ,            virgule
//   + - − * x × / ÷ opérateurs
//   =              égal
//   %              pourcentage
//   ± n            changement de signe
//   c C AC ac      effacement

use std::fmt;

use super::erreur::ErreurTouche;
use super::machine::Chiffre;
use super::operateur::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    Chiffre(Chiffre),
    Virgule,
    Operateur(Operateur),
    Egal,
    Pourcentage,
    Signe,
    Effacer,
}

impl Touche {
    /// Un symbole -> une touche.
    pub fn depuis_texte(texte: &str) -> Result<Self, ErreurTouche> {
        let t = texte.trim();

        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Chiffre::depuis_char(c).map(Touche::Chiffre);
            }
        }

        match t {
            "." | "," => Ok(Touche::Virgule),
            "=" => Ok(Touche::Egal),
            "%" => Ok(Touche::Pourcentage),
            "±" | "n" => Ok(Touche::Signe),
            "c" | "C" | "AC" | "ac" => Ok(Touche::Effacer),
            _ => Operateur::depuis_symbole(t)
                .map(Touche::Operateur)
                .map_err(|_| ErreurTouche::Inconnue(texte.to_string())),
        }
    }

    /// Une suite de symboles ("12+3=") -> suite de touches. Espaces ignorés.
    pub fn sequence(texte: &str) -> Result<Vec<Self>, ErreurTouche> {
        let mut touches = Vec::new();
        let mut reste = texte;

        while let Some(c) = reste.chars().next() {
            if c.is_whitespace() {
                reste = &reste[c.len_utf8()..];
                continue;
            }

            // "AC" est le seul symbole sur deux caractères
            if let Some(apres) = reste.strip_prefix("AC").or_else(|| reste.strip_prefix("ac")) {
                touches.push(Touche::Effacer);
                reste = apres;
                continue;
            }

            let (symbole, apres) = reste.split_at(c.len_utf8());
            touches.push(Self::depuis_texte(symbole)?);
            reste = apres;
        }

        Ok(touches)
    }

    /// Libellé affiché sur la touche (hors effacement, qui dépend de l’état).
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.caractere().to_string(),
            Touche::Virgule => ".".to_string(),
            Touche::Operateur(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Pourcentage => "%".to_string(),
            Touche::Signe => "±".to_string(),
            Touche::Effacer => "AC".to_string(),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.libelle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chiffre(c: char) -> Touche {
        Touche::Chiffre(Chiffre::depuis_char(c).unwrap())
    }

    #[test]
    fn symboles_simples() {
        assert_eq!(Touche::depuis_texte("7"), Ok(chiffre('7')));
        assert_eq!(Touche::depuis_texte(","), Ok(Touche::Virgule));
        assert_eq!(Touche::depuis_texte(" = "), Ok(Touche::Egal));
        assert_eq!(Touche::depuis_texte("%"), Ok(Touche::Pourcentage));
        assert_eq!(Touche::depuis_texte("±"), Ok(Touche::Signe));
        assert_eq!(Touche::depuis_texte("AC"), Ok(Touche::Effacer));
        assert_eq!(
            Touche::depuis_texte("×"),
            Ok(Touche::Operateur(Operateur::Fois))
        );
    }

    #[test]
    fn symbole_inconnu() {
        assert_eq!(
            Touche::depuis_texte("^"),
            Err(ErreurTouche::Inconnue("^".into()))
        );
        assert!(Touche::depuis_texte("12").is_err());
        assert!(Touche::depuis_texte("").is_err());
    }

    #[test]
    fn sequence_complete() {
        let touches = Touche::sequence("12 + 3.5 =").unwrap();
        assert_eq!(
            touches,
            vec![
                chiffre('1'),
                chiffre('2'),
                Touche::Operateur(Operateur::Plus),
                chiffre('3'),
                Touche::Virgule,
                chiffre('5'),
                Touche::Egal,
            ]
        );
    }

    #[test]
    fn sequence_avec_effacement_et_unicode() {
        let touches = Touche::sequence("9÷3AC−±").unwrap();
        assert_eq!(
            touches,
            vec![
                chiffre('9'),
                Touche::Operateur(Operateur::Divise),
                chiffre('3'),
                Touche::Effacer,
                Touche::Operateur(Operateur::Moins),
                Touche::Signe,
            ]
        );
    }

    #[test]
    fn sequence_s_arrete_sur_symbole_inconnu() {
        assert_eq!(
            Touche::sequence("1+?"),
            Err(ErreurTouche::Inconnue("?".into()))
        );
    }

    #[test]
    fn libelles() {
        assert_eq!(chiffre('0').to_string(), "0");
        assert_eq!(Touche::Operateur(Operateur::Moins).to_string(), "−");
        assert_eq!(Touche::Signe.libelle(), "±");
    }
}
