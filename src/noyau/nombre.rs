// src/noyau/nombre.rs
//
// Conversions nombre <-> texte
// ----------------------------
// Politique explicite (indépendante de `Display` pour f64) :
// - lire_nombre        : règles de parseFloat (ECMAScript), plus long préfixe décimal valide
// - ecrire_nombre      : règles de Number::toString (ECMAScript), chiffres les plus courts
// - ecrire_exponentiel : règles de toExponential(f), arrondi EXACT (BigRational)
//
// Pourquoi pas `{}` de Rust ?
// - 1e21 s’écrit "1000000000000000000000" en Rust, "1e+21" attendu
// - f64::INFINITY s’écrit "inf", "Infinity" attendu
// - -0.0 s’écrit "-0", "0" attendu

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

/* ------------------------ Lecture (parseFloat) ------------------------ */

/// Texte -> f64, à la manière de parseFloat :
/// - espaces initiaux ignorés
/// - signe optionnel, puis "Infinity" ou un littéral décimal
/// - on garde le plus long préfixe valide ("12abc" -> 12, "1e+215" -> 1e215)
/// - aucun préfixe valide -> NaN (y compris "NaN" lui-même)
pub fn lire_nombre(texte: &str) -> f64 {
    let s = texte.trim_start();

    let (signe, corps) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };

    if corps.starts_with("Infinity") {
        return signe * f64::INFINITY;
    }

    let n = longueur_prefixe_decimal(corps);
    if n == 0 {
        return f64::NAN;
    }

    match corps[..n].parse::<f64>() {
        Ok(v) => signe * v,
        Err(_) => f64::NAN,
    }
}

/// Longueur du plus long préfixe de la forme `chiffres [. chiffres] [e [±] chiffres]`
/// (au moins un chiffre dans la mantisse). 0 si aucun.
fn longueur_prefixe_decimal(s: &str) -> usize {
    let b = s.as_bytes();
    let chiffres = |depuis: usize| b[depuis..].iter().take_while(|c| c.is_ascii_digit()).count();

    let entiers = chiffres(0);
    let mut fin = entiers;
    let mut fraction = 0;

    if b.get(fin) == Some(&b'.') {
        fraction = chiffres(fin + 1);
        if entiers + fraction > 0 {
            fin += 1 + fraction;
        }
    }

    if entiers + fraction == 0 {
        return 0;
    }

    // exposant : seulement s’il est complet ("1e" -> 1, "1e+" -> 1)
    if matches!(b.get(fin), Some(b'e' | b'E')) {
        let mut k = fin + 1;
        if matches!(b.get(k), Some(b'+' | b'-')) {
            k += 1;
        }
        let exp = chiffres(k);
        if exp > 0 {
            fin = k + exp;
        }
    }

    fin
}

/* ------------------------ Écriture (Number::toString) ------------------------ */

/// f64 -> texte, à la manière de Number::toString.
///
/// Avec x = 0.d1d2…dk × 10^n (chiffres les plus courts qui relisent x) :
/// - k ≤ n ≤ 21      : chiffres suivis de n−k zéros ("100")
/// - 0 < n ≤ 21      : virgule insérée ("12.5")
/// - −6 < n ≤ 0      : "0." + zéros + chiffres ("0.0001")
/// - sinon           : exponentielle ("1e+21", "1.5e-7")
pub fn ecrire_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        // -0 compris
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (chiffres, n) = chiffres_courts(x.abs());
    let k = chiffres.len() as i32;

    let corps = if k <= n && n <= 21 {
        format!("{chiffres}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (entier, fraction) = chiffres.split_at(n as usize);
        format!("{entier}.{fraction}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{chiffres}", "0".repeat((-n) as usize))
    } else {
        let (tete, reste) = chiffres.split_at(1);
        let point = if reste.is_empty() { "" } else { "." };
        format!("{tete}{point}{reste}{}", exposant_signe(n - 1))
    };

    format!("{signe}{corps}")
}

/// Chiffres significatifs les plus courts et position n de la virgule (x = 0.d1d2… × 10^n).
///
/// `{:e}` produit déjà la représentation la plus courte qui relit x ("1.2345e3").
fn chiffres_courts(x: f64) -> (String, i32) {
    let sci = format!("{x:e}");
    let (mantisse, exposant) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    let exposant: i32 = exposant.parse().unwrap_or(0);
    (chiffres, exposant + 1)
}

fn exposant_signe(e: i32) -> String {
    if e >= 0 {
        format!("e+{e}")
    } else {
        format!("e-{}", -e)
    }
}

/* ------------------------ Écriture (toExponential) ------------------------ */

/// f64 -> "d.ddde±n" avec exactement `fraction` chiffres après la virgule.
///
/// Arrondi : on cherche n entier (10^f ≤ n < 10^(f+1)) tel que n × 10^(e−f) soit
/// le plus proche de |x|, calculé EXACTEMENT sur la valeur binaire de x.
/// Égalité parfaite -> le plus grand n (demi vers l’extérieur).
pub fn ecrire_exponentiel(x: f64, fraction: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        // -0 compris : pas de signe
        let zeros = "0".repeat(fraction);
        let point = if fraction > 0 { "." } else { "" };
        return format!("0{point}{zeros}e+0");
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let Some(valeur) = BigRational::from_float(x.abs()) else {
        return "NaN".to_string();
    };

    let f = fraction as i32;
    let borne_basse = BigInt::from(10).pow(fraction as u32);
    let borne_haute = &borne_basse * BigInt::from(10);

    // estimation flottante, corrigée ensuite exactement (au plus un pas)
    let mut e = x.abs().log10().floor() as i32;
    let n = loop {
        let n = (&valeur / puissance_dix(e - f)).round().to_integer();
        if n >= borne_haute {
            e += 1;
        } else if n < borne_basse {
            e -= 1;
        } else {
            break n;
        }
    };

    let chiffres = n.to_string();
    let (tete, reste) = chiffres.split_at(1);
    let point = if reste.is_empty() { "" } else { "." };
    format!("{signe}{tete}{point}{reste}{}", exposant_signe(e))
}

/// 10^p exact (p négatif accepté).
fn puissance_dix(p: i32) -> BigRational {
    let base = BigInt::from(10).pow(p.unsigned_abs());
    if p >= 0 {
        BigRational::from_integer(base)
    } else {
        BigRational::new(BigInt::one(), base)
    }
}
