//! Tests de scénarios : suites de touches complètes + propriétés.
//!
//! - scénarios du pavé (ce qu’un utilisateur tape, ce que l’écran montre)
//! - propriétés vérifiées sur des suites pseudo-aléatoires (RNG déterministe, seed fixe)

use super::{format_affichage, EtatCalc, PolitiqueAffichage, Touche};

fn jouer(sequence: &str) -> EtatCalc {
    let mut etat = EtatCalc::default();
    for t in Touche::sequence(sequence).unwrap_or_else(|e| panic!("seq={sequence:?} err={e}")) {
        etat.appuyer(t);
    }
    etat
}

fn assert_ecran(sequence: &str, attendu: &str) {
    assert_eq!(jouer(sequence).affichage(), attendu, "seq={sequence:?}");
}

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn pick(&mut self, n: u32) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.state >> 32) as u32) % n
    }

    fn touche(&mut self) -> char {
        const TOUCHES: &[char] = &[
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.', '+', '-', '×', '÷', '=', '%',
            '±',
        ];
        TOUCHES[self.pick(TOUCHES.len() as u32) as usize]
    }
}

/* ------------------------ Scénarios ------------------------ */

#[test]
fn addition_simple() {
    assert_ecran("7+3=", "10");
}

#[test]
fn division_par_zero_affiche_infinity() {
    assert_ecran("6÷0=", "Infinity");
    assert_ecran("6±÷0=", "-Infinity");
    assert_ecran("0÷0=", "NaN");
}

#[test]
fn chainage_gauche_a_droite() {
    let e = jouer("5+2+");
    assert_eq!(e.affichage(), "7");
    assert_eq!(e.valeur_precedente(), Some(7.0));

    // "=" sans nouvel opérande : 7 + 7
    assert_ecran("5+2+=", "14");

    // pas de priorité : (5 + 2) × 3
    assert_ecran("5+2×3=", "21");
}

#[test]
fn double_changement_de_signe() {
    assert_ecran("9±±", "9");
}

#[test]
fn artefact_flottant_conserve() {
    let e = jouer("0.1+0.2=");
    assert_eq!(e.affichage(), "0.30000000000000004");
    assert_eq!(
        format_affichage(e.affichage(), &PolitiqueAffichage::default()),
        "3.000e-1"
    );
}

#[test]
fn dix_chiffres_en_exponentielle() {
    let e = jouer("1234567890");
    assert_eq!(e.affichage(), "1234567890");
    assert_eq!(
        format_affichage(e.affichage(), &PolitiqueAffichage::default()),
        "1.235e+9"
    );
}

#[test]
fn precedente_nan_compte_pour_zero_en_chainage() {
    // 0 ÷ 0 = NaN capturé, puis "+ 5 +" chaîne avec 0 à gauche
    let e = jouer("0÷0+");
    assert_eq!(e.affichage(), "NaN");
    assert!(e.valeur_precedente().is_some_and(f64::is_nan));
    assert_eq!(e.libelle_effacement(), "C");

    assert_ecran("0÷0+5+", "5");
    assert_ecran("0÷0+5+=", "10");
}

#[test]
fn signe_et_pourcentage_gardent_le_drapeau() {
    // après "=", ± et % travaillent sur le résultat ; le chiffre suivant le remplace
    assert_ecran("1÷0=%", "Infinity");
    assert_ecran("1÷0=±", "-Infinity");
    assert_ecran("1÷0=±5", "5");

    // en cours de saisie, le chiffre suivant s’ajoute derrière
    assert_ecran("9±5", "-95");
}

#[test]
fn grands_nombres_en_exponentielle_ecran() {
    // 10^11 × 10^11 = 1e+22 : l’écran stocke déjà la forme exponentielle
    assert_ecran("100000000000×100000000000=", "1e+22");
    assert_ecran("100000000000×100000000000=×2=", "2e+22");
}

#[test]
fn petits_nombres() {
    assert_ecran("1÷10000000=", "1e-7");
    assert_ecran("1÷1000000=", "0.000001");
}

#[test]
fn effacement_au_milieu() {
    assert_ecran("8×AC2=", "2");
    assert_eq!(jouer("8×C"), EtatCalc::default());
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_chiffres_concatenes_sans_zero_initial() {
    let mut rng = Rng::new(0xC0FFEE);
    for _ in 0..200 {
        let longueur = 1 + rng.pick(14);
        let chiffres: String = (0..longueur)
            .map(|_| char::from(b'0' + rng.pick(10) as u8))
            .collect();

        let mut attendu = chiffres.trim_start_matches('0').to_string();
        if attendu.is_empty() {
            attendu.push('0');
        }

        let e = jouer(&format!("AC{chiffres}"));
        assert_eq!(e.affichage(), attendu, "chiffres={chiffres:?}");
    }
}

#[test]
fn prop_virgule_idempotente() {
    let mut rng = Rng::new(7);
    for _ in 0..200 {
        let prefixe: String = (0..rng.pick(12)).map(|_| rng.touche()).collect();
        let une = jouer(&format!("{prefixe}."));
        let deux = une.apres(Touche::Virgule);
        assert_eq!(deux, une, "prefixe={prefixe:?}");
    }
}

#[test]
fn prop_effacer_revient_a_l_etat_initial() {
    let mut rng = Rng::new(42);
    for _ in 0..300 {
        let historique: String = (0..rng.pick(30)).map(|_| rng.touche()).collect();
        let e = jouer(&historique).apres(Touche::Effacer);
        assert_eq!(e, EtatCalc::default(), "historique={historique:?}");
        assert_eq!(e.libelle_effacement(), "AC");
    }
}

#[test]
fn prop_invariants_apres_chaque_touche() {
    let mut rng = Rng::new(2024);
    for _ in 0..300 {
        let mut e = EtatCalc::default();
        for _ in 0..40 {
            let c = rng.touche();
            let t = Touche::depuis_texte(&c.to_string()).unwrap();
            e.appuyer(t);

            if e.operation().is_some() {
                assert!(e.valeur_precedente().is_some(), "etat={e:?}");
            }
            assert!(
                e.affichage().matches('.').count() <= 1,
                "deux virgules: {e:?}"
            );
            if matches!(t, Touche::Operateur(_)) {
                assert!(e.attente_operande());
            }
        }
    }
}

#[test]
fn prop_rendu_borne() {
    let politique = PolitiqueAffichage::default();
    let mut rng = Rng::new(99);
    for _ in 0..300 {
        let historique: String = (0..rng.pick(25)).map(|_| rng.touche()).collect();
        let e = jouer(&historique);
        let rendu = format_affichage(e.affichage(), &politique);
        // exponentielle : au plus "-d.ddde-308" ; sinon texte d’origine ≤ 9
        assert!(rendu.chars().count() <= 11, "rendu={rendu:?} seq={historique:?}");
    }
}
