use crate::physics::configuration::{self, SubshellToken};
use crate::physics::elements::Element;
use crate::physics::nucleus::NucleusProfile;
use crate::simulation::layout::{LayoutConfig, OrbitLayoutGenerator};
use crate::simulation::orbit::OrbitDescriptor;
use glam::Vec3;
use log::debug;
use rand::Rng;
use serde::Serialize;

/// Rings generated for one subshell of the configuration.
#[derive(Clone, Debug, Serialize)]
pub struct SubshellOrbits {
    pub token: SubshellToken,
    pub orbits: Vec<OrbitDescriptor>,
}

impl SubshellOrbits {
    pub fn electron_count(&self) -> u32 {
        self.orbits
            .iter()
            .fold(0u32, |total, orbit| total.saturating_add(orbit.electron_count))
    }
}

/// Everything a renderer needs to draw one animated atom.
#[derive(Clone, Debug, Serialize)]
pub struct Atom {
    element: Option<Element>,
    configuration: String,
    nucleus: NucleusProfile,
    subshells: Vec<SubshellOrbits>,
}

impl Atom {
    pub fn new<R: Rng>(
        element: Element,
        generator: &mut OrbitLayoutGenerator<R>,
        config: LayoutConfig,
    ) -> Self {
        let raw = element.electron_configuration;
        Self::with_configuration(element, raw, generator, config)
    }

    /// Model for `element` drawn with a caller supplied configuration,
    /// e.g. an ion or an excited state.
    pub fn with_configuration<R: Rng>(
        element: Element,
        raw: &str,
        generator: &mut OrbitLayoutGenerator<R>,
        config: LayoutConfig,
    ) -> Self {
        let mut atom = Self::build(
            raw,
            configuration::expand(raw),
            NucleusProfile::for_atomic_number(element.atomic_number),
            generator,
            config,
        );
        debug!(
            "{}: {} subshells, {} rings, {} electrons",
            element,
            atom.subshells.len(),
            atom.ring_count(),
            atom.electron_count()
        );
        atom.element = Some(element);
        atom
    }

    /// Model for a free-standing configuration string.
    ///
    /// The nucleus is sized from the electron count, i.e. a neutral atom is
    /// assumed.
    pub fn from_configuration<R: Rng>(
        raw: &str,
        generator: &mut OrbitLayoutGenerator<R>,
        config: LayoutConfig,
    ) -> Self {
        let tokens = configuration::expand(raw);
        let z = u8::try_from(configuration::electron_total(&tokens)).unwrap_or(u8::MAX);
        let atom = Self::build(
            raw,
            tokens,
            NucleusProfile::for_atomic_number(z),
            generator,
            config,
        );
        debug!(
            "{:?}: {} subshells, {} rings",
            raw,
            atom.subshells.len(),
            atom.ring_count()
        );
        atom
    }

    fn build<R: Rng>(
        raw: &str,
        tokens: Vec<SubshellToken>,
        nucleus: NucleusProfile,
        generator: &mut OrbitLayoutGenerator<R>,
        config: LayoutConfig,
    ) -> Self {
        let subshells = tokens
            .into_iter()
            .map(|token| SubshellOrbits {
                orbits: generator.generate_subshell(&token, config),
                token,
            })
            .collect();

        Self {
            element: None,
            configuration: raw.to_owned(),
            nucleus,
            subshells,
        }
    }

    pub fn element(&self) -> Option<&Element> {
        self.element.as_ref()
    }

    pub fn configuration(&self) -> &str {
        &self.configuration
    }

    pub fn nucleus(&self) -> &NucleusProfile {
        &self.nucleus
    }

    pub fn subshells(&self) -> &[SubshellOrbits] {
        &self.subshells
    }

    pub fn orbits(&self) -> impl Iterator<Item = &OrbitDescriptor> {
        self.subshells.iter().flat_map(|subshell| subshell.orbits.iter())
    }

    pub fn ring_count(&self) -> usize {
        self.subshells.iter().map(|subshell| subshell.orbits.len()).sum()
    }

    pub fn electron_count(&self) -> u32 {
        self.subshells
            .iter()
            .fold(0u32, |total, subshell| total.saturating_add(subshell.electron_count()))
    }

    /// Scene positions of every electron after `elapsed` seconds.
    pub fn electron_positions(&self, elapsed: f32) -> Vec<Vec3> {
        self.orbits()
            .flat_map(|orbit| orbit.electron_positions(elapsed))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::configuration::SubshellType;

    #[test]
    fn atom_holds_one_electron_per_proton() {
        let mut generator = OrbitLayoutGenerator::with_seed(9);
        for element in Element::all() {
            let atom = Atom::new(element.clone(), &mut generator, LayoutConfig::default());
            assert_eq!(atom.electron_count(), u32::from(element.atomic_number));
            assert_eq!(
                atom.electron_positions(1.0).len(),
                usize::from(element.atomic_number)
            );
        }
    }

    #[test]
    fn iron_rings_follow_its_subshells() {
        let mut generator = OrbitLayoutGenerator::with_seed(9);
        let iron = Element::by_symbol("Fe").unwrap();
        let atom = Atom::new(iron, &mut generator, LayoutConfig::default());
        // 1s 2s 2p 3s 3p 3d6 4s
        let rings: Vec<usize> = atom.subshells().iter().map(|s| s.orbits.len()).collect();
        assert_eq!(rings, vec![1, 1, 3, 1, 3, 5, 1]);
        assert_eq!(atom.ring_count(), 15);
        let d = &atom.subshells()[5];
        let split: Vec<u32> = d.orbits.iter().map(|o| o.electron_count).collect();
        assert_eq!(split, vec![2, 1, 1, 1, 1]);
    }

    #[test]
    fn electrons_stay_on_their_rings() {
        let mut generator = OrbitLayoutGenerator::with_seed(2);
        let atom = Atom::new(
            Element::by_symbol("Na").unwrap(),
            &mut generator,
            LayoutConfig::default(),
        );
        for orbit in atom.orbits() {
            for position in orbit.electron_positions(3.7) {
                assert!((position.length() - orbit.ring_radius).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn free_configuration_sizes_nucleus_from_electrons() {
        let mut generator = OrbitLayoutGenerator::with_seed(2);
        let atom = Atom::from_configuration("[Ne] 3s2", &mut generator, LayoutConfig::default());
        assert!(atom.element().is_none());
        assert_eq!(atom.electron_count(), 12);
        assert_eq!(*atom.nucleus(), NucleusProfile::for_atomic_number(12));
        assert_eq!(atom.configuration(), "[Ne] 3s2");
    }

    #[test]
    fn ion_keeps_element_nucleus() {
        let mut generator = OrbitLayoutGenerator::with_seed(2);
        let sodium = Element::by_symbol("Na").unwrap();
        let atom = Atom::with_configuration(sodium, "[Ne]", &mut generator, LayoutConfig::default());
        assert_eq!(atom.electron_count(), 10);
        assert_eq!(*atom.nucleus(), NucleusProfile::for_atomic_number(11));
        assert_eq!(atom.element().map(|e| e.symbol), Some("Na"));
    }

    #[test]
    fn oversized_terms_do_not_reach_the_layout() {
        let mut generator = OrbitLayoutGenerator::with_seed(2);
        let config = LayoutConfig::default();
        let atom = Atom::from_configuration("1s4294967295 2s1", &mut generator, config);
        assert_eq!(atom.electron_count(), 1);
        assert_eq!(*atom.nucleus(), NucleusProfile::for_atomic_number(1));

        let atom = Atom::from_configuration("1s400000000", &mut generator, config);
        assert!(atom.subshells().is_empty());
        assert!(atom.electron_positions(0.0).is_empty());
    }

    #[test]
    fn electron_count_saturates_on_huge_rings() {
        let mut generator = OrbitLayoutGenerator::with_seed(2);
        let token = SubshellToken::new(1, SubshellType::S, u32::MAX);
        let orbits = SubshellOrbits {
            orbits: generator.generate_subshell(&token, LayoutConfig::default()),
            token,
        };
        let twice = SubshellOrbits {
            orbits: [orbits.orbits.clone(), orbits.orbits.clone()].concat(),
            token,
        };
        assert_eq!(orbits.electron_count(), u32::MAX);
        assert_eq!(twice.electron_count(), u32::MAX);
    }

    #[test]
    fn garbled_configuration_yields_empty_model() {
        let mut generator = OrbitLayoutGenerator::with_seed(2);
        let atom = Atom::from_configuration("[Zz] ???", &mut generator, LayoutConfig::default());
        assert!(atom.subshells().is_empty());
        assert_eq!(atom.ring_count(), 0);
        assert!(atom.electron_positions(0.0).is_empty());
    }
}
