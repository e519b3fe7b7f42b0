use rand::Rng;

/// Sélectionne aléatoirement jusqu'à `nombre` vainqueurs parmi `participants`.
///
/// Mélange de Fisher–Yates sur une copie de la collection complète, puis
/// préfixe de taille `min(nombre, effectif)`: chaque permutation de cette
/// taille est équiprobable, l'ordre du préfixe donne le rang final (premier
/// élément = rang 1). Sans doublon par construction.
///
/// L'appelant est responsable de rejeter `nombre == 0` et une liste vide;
/// ici `nombre > effectif` est simplement écrêté (tout le monde gagne).
pub fn selectionner_vainqueurs<T: Clone>(participants: &[T], nombre: usize) -> Vec<T> {
    let mut disponibles: Vec<T> = participants.to_vec();
    let effectif = nombre.min(disponibles.len());

    let mut rng = rand::rng();
    for i in (1..disponibles.len()).rev() {
        let j = rng.random_range(0..=i);
        disponibles.swap(i, j);
    }

    disponibles.truncate(effectif);
    disponibles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cardinalite_et_distinct() {
        let participants: Vec<u32> = (0..20).collect();

        let vainqueurs = selectionner_vainqueurs(&participants, 5);
        assert_eq!(vainqueurs.len(), 5);

        let uniques: HashSet<u32> = vainqueurs.iter().copied().collect();
        assert_eq!(uniques.len(), 5);
        assert!(vainqueurs.iter().all(|v| participants.contains(v)));
    }

    #[test]
    fn test_ecretage_quand_nombre_depasse_effectif() {
        let participants = vec!["a", "b", "c"];

        let vainqueurs = selectionner_vainqueurs(&participants, 10);
        assert_eq!(vainqueurs.len(), 3);

        let uniques: HashSet<&str> = vainqueurs.iter().copied().collect();
        assert_eq!(uniques.len(), 3);
    }

    #[test]
    fn test_participant_unique() {
        let participants = vec![42u32];
        assert_eq!(selectionner_vainqueurs(&participants, 1), vec![42]);
        assert_eq!(selectionner_vainqueurs(&participants, 5), vec![42]);
    }

    #[test]
    fn test_uniformite_tirage_simple() {
        // 2000 tirages d'un vainqueur parmi 5: chaque participant doit
        // sortir avec une fréquence proche de 1/5. Bornes très larges
        // (0.10..0.30 pour une espérance de 0.20) pour rester déterministe
        // en pratique.
        let participants: Vec<usize> = (0..5).collect();
        let essais = 2000;
        let mut comptes = [0usize; 5];

        for _ in 0..essais {
            let gagnant = selectionner_vainqueurs(&participants, 1)[0];
            comptes[gagnant] += 1;
        }

        for compte in comptes {
            let freq = compte as f64 / essais as f64;
            assert!(
                (0.10..=0.30).contains(&freq),
                "fréquence hors bornes: {freq}"
            );
        }
    }

    #[test]
    fn test_permutation_complete_couvre_tout() {
        let participants: Vec<u32> = (0..8).collect();

        let vainqueurs = selectionner_vainqueurs(&participants, 8);
        let uniques: HashSet<u32> = vainqueurs.iter().copied().collect();
        assert_eq!(uniques, participants.iter().copied().collect());
    }
}
