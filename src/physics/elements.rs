use crate::physics::configuration::{self, SubshellToken};
use serde::{Deserialize, Serialize};
use std::fmt;
use ElementCategory::{
    Actinide, AlkaliMetal, AlkalineEarthMetal, Halogen, Lanthanide, Metalloid, NobleGas, NonMetal,
    PostTransitionMetal, TransitionMetal, Unknown,
};

/// Family an element belongs to, used to colour and filter tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    NonMetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementCategory {
    pub const ALL: [ElementCategory; 11] = [
        Self::AlkaliMetal,
        Self::AlkalineEarthMetal,
        Self::TransitionMetal,
        Self::PostTransitionMetal,
        Self::Metalloid,
        Self::NonMetal,
        Self::Halogen,
        Self::NobleGas,
        Self::Lanthanide,
        Self::Actinide,
        Self::Unknown,
    ];

    /// Stable kebab-case identifier, e.g. `noble-gas`.
    pub fn label(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali-metal",
            Self::AlkalineEarthMetal => "alkaline-earth-metal",
            Self::TransitionMetal => "transition-metal",
            Self::PostTransitionMetal => "post-transition-metal",
            Self::Metalloid => "metalloid",
            Self::NonMetal => "non-metal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble-gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
    }

    /// Human readable name, e.g. `noble gas`.
    pub fn display_name(self) -> String {
        self.label().replace('-', " ")
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Basic metadata describing a chemical element.
#[derive(Clone, Debug, Serialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Standard atomic weight in u; mass number of the longest-lived isotope
    /// for elements without a stable one.
    pub atomic_mass: f32,
    pub category: ElementCategory,
    /// Ground-state configuration, usually in noble-gas shorthand.
    pub electron_configuration: &'static str,
}

const ELEMENTS: [Element; 118] = [
    Element::new(1, "H", "Hydrogen", 1.008, NonMetal, "1s1"),
    Element::new(2, "He", "Helium", 4.0026, NobleGas, "1s2"),
    Element::new(3, "Li", "Lithium", 6.94, AlkaliMetal, "[He] 2s1"),
    Element::new(4, "Be", "Beryllium", 9.0122, AlkalineEarthMetal, "[He] 2s2"),
    Element::new(5, "B", "Boron", 10.81, Metalloid, "[He] 2s2 2p1"),
    Element::new(6, "C", "Carbon", 12.011, NonMetal, "[He] 2s2 2p2"),
    Element::new(7, "N", "Nitrogen", 14.007, NonMetal, "[He] 2s2 2p3"),
    Element::new(8, "O", "Oxygen", 15.999, NonMetal, "[He] 2s2 2p4"),
    Element::new(9, "F", "Fluorine", 18.998, Halogen, "[He] 2s2 2p5"),
    Element::new(10, "Ne", "Neon", 20.18, NobleGas, "[He] 2s2 2p6"),
    Element::new(11, "Na", "Sodium", 22.99, AlkaliMetal, "[Ne] 3s1"),
    Element::new(12, "Mg", "Magnesium", 24.305, AlkalineEarthMetal, "[Ne] 3s2"),
    Element::new(13, "Al", "Aluminium", 26.982, PostTransitionMetal, "[Ne] 3s2 3p1"),
    Element::new(14, "Si", "Silicon", 28.085, Metalloid, "[Ne] 3s2 3p2"),
    Element::new(15, "P", "Phosphorus", 30.974, NonMetal, "[Ne] 3s2 3p3"),
    Element::new(16, "S", "Sulfur", 32.06, NonMetal, "[Ne] 3s2 3p4"),
    Element::new(17, "Cl", "Chlorine", 35.45, Halogen, "[Ne] 3s2 3p5"),
    Element::new(18, "Ar", "Argon", 39.948, NobleGas, "[Ne] 3s2 3p6"),
    Element::new(19, "K", "Potassium", 39.098, AlkaliMetal, "[Ar] 4s1"),
    Element::new(20, "Ca", "Calcium", 40.078, AlkalineEarthMetal, "[Ar] 4s2"),
    Element::new(21, "Sc", "Scandium", 44.956, TransitionMetal, "[Ar] 3d1 4s2"),
    Element::new(22, "Ti", "Titanium", 47.867, TransitionMetal, "[Ar] 3d2 4s2"),
    Element::new(23, "V", "Vanadium", 50.942, TransitionMetal, "[Ar] 3d3 4s2"),
    Element::new(24, "Cr", "Chromium", 51.996, TransitionMetal, "[Ar] 3d5 4s1"),
    Element::new(25, "Mn", "Manganese", 54.938, TransitionMetal, "[Ar] 3d5 4s2"),
    Element::new(26, "Fe", "Iron", 55.845, TransitionMetal, "[Ar] 3d6 4s2"),
    Element::new(27, "Co", "Cobalt", 58.933, TransitionMetal, "[Ar] 3d7 4s2"),
    Element::new(28, "Ni", "Nickel", 58.693, TransitionMetal, "[Ar] 3d8 4s2"),
    Element::new(29, "Cu", "Copper", 63.546, TransitionMetal, "[Ar] 3d10 4s1"),
    Element::new(30, "Zn", "Zinc", 65.38, TransitionMetal, "[Ar] 3d10 4s2"),
    Element::new(31, "Ga", "Gallium", 69.723, PostTransitionMetal, "[Ar] 3d10 4s2 4p1"),
    Element::new(32, "Ge", "Germanium", 72.63, Metalloid, "[Ar] 3d10 4s2 4p2"),
    Element::new(33, "As", "Arsenic", 74.922, Metalloid, "[Ar] 3d10 4s2 4p3"),
    Element::new(34, "Se", "Selenium", 78.971, NonMetal, "[Ar] 3d10 4s2 4p4"),
    Element::new(35, "Br", "Bromine", 79.904, Halogen, "[Ar] 3d10 4s2 4p5"),
    Element::new(36, "Kr", "Krypton", 83.798, NobleGas, "[Ar] 3d10 4s2 4p6"),
    Element::new(37, "Rb", "Rubidium", 85.468, AlkaliMetal, "[Kr] 5s1"),
    Element::new(38, "Sr", "Strontium", 87.62, AlkalineEarthMetal, "[Kr] 5s2"),
    Element::new(39, "Y", "Yttrium", 88.906, TransitionMetal, "[Kr] 4d1 5s2"),
    Element::new(40, "Zr", "Zirconium", 91.224, TransitionMetal, "[Kr] 4d2 5s2"),
    Element::new(41, "Nb", "Niobium", 92.906, TransitionMetal, "[Kr] 4d4 5s1"),
    Element::new(42, "Mo", "Molybdenum", 95.95, TransitionMetal, "[Kr] 4d5 5s1"),
    Element::new(43, "Tc", "Technetium", 98.0, TransitionMetal, "[Kr] 4d5 5s2"),
    Element::new(44, "Ru", "Ruthenium", 101.07, TransitionMetal, "[Kr] 4d7 5s1"),
    Element::new(45, "Rh", "Rhodium", 102.91, TransitionMetal, "[Kr] 4d8 5s1"),
    Element::new(46, "Pd", "Palladium", 106.42, TransitionMetal, "[Kr] 4d10"),
    Element::new(47, "Ag", "Silver", 107.87, TransitionMetal, "[Kr] 4d10 5s1"),
    Element::new(48, "Cd", "Cadmium", 112.41, TransitionMetal, "[Kr] 4d10 5s2"),
    Element::new(49, "In", "Indium", 114.82, PostTransitionMetal, "[Kr] 4d10 5s2 5p1"),
    Element::new(50, "Sn", "Tin", 118.71, PostTransitionMetal, "[Kr] 4d10 5s2 5p2"),
    Element::new(51, "Sb", "Antimony", 121.76, Metalloid, "[Kr] 4d10 5s2 5p3"),
    Element::new(52, "Te", "Tellurium", 127.6, Metalloid, "[Kr] 4d10 5s2 5p4"),
    Element::new(53, "I", "Iodine", 126.9, Halogen, "[Kr] 4d10 5s2 5p5"),
    Element::new(54, "Xe", "Xenon", 131.29, NobleGas, "[Kr] 4d10 5s2 5p6"),
    Element::new(55, "Cs", "Caesium", 132.91, AlkaliMetal, "[Xe] 6s1"),
    Element::new(56, "Ba", "Barium", 137.33, AlkalineEarthMetal, "[Xe] 6s2"),
    Element::new(57, "La", "Lanthanum", 138.91, Lanthanide, "[Xe] 5d1 6s2"),
    Element::new(58, "Ce", "Cerium", 140.12, Lanthanide, "[Xe] 4f1 5d1 6s2"),
    Element::new(59, "Pr", "Praseodymium", 140.91, Lanthanide, "[Xe] 4f3 6s2"),
    Element::new(60, "Nd", "Neodymium", 144.24, Lanthanide, "[Xe] 4f4 6s2"),
    Element::new(61, "Pm", "Promethium", 145.0, Lanthanide, "[Xe] 4f5 6s2"),
    Element::new(62, "Sm", "Samarium", 150.36, Lanthanide, "[Xe] 4f6 6s2"),
    Element::new(63, "Eu", "Europium", 151.96, Lanthanide, "[Xe] 4f7 6s2"),
    Element::new(64, "Gd", "Gadolinium", 157.25, Lanthanide, "[Xe] 4f7 5d1 6s2"),
    Element::new(65, "Tb", "Terbium", 158.93, Lanthanide, "[Xe] 4f9 6s2"),
    Element::new(66, "Dy", "Dysprosium", 162.5, Lanthanide, "[Xe] 4f10 6s2"),
    Element::new(67, "Ho", "Holmium", 164.93, Lanthanide, "[Xe] 4f11 6s2"),
    Element::new(68, "Er", "Erbium", 167.26, Lanthanide, "[Xe] 4f12 6s2"),
    Element::new(69, "Tm", "Thulium", 168.93, Lanthanide, "[Xe] 4f13 6s2"),
    Element::new(70, "Yb", "Ytterbium", 173.05, Lanthanide, "[Xe] 4f14 6s2"),
    Element::new(71, "Lu", "Lutetium", 174.97, Lanthanide, "[Xe] 4f14 5d1 6s2"),
    Element::new(72, "Hf", "Hafnium", 178.49, TransitionMetal, "[Xe] 4f14 5d2 6s2"),
    Element::new(73, "Ta", "Tantalum", 180.95, TransitionMetal, "[Xe] 4f14 5d3 6s2"),
    Element::new(74, "W", "Tungsten", 183.84, TransitionMetal, "[Xe] 4f14 5d4 6s2"),
    Element::new(75, "Re", "Rhenium", 186.21, TransitionMetal, "[Xe] 4f14 5d5 6s2"),
    Element::new(76, "Os", "Osmium", 190.23, TransitionMetal, "[Xe] 4f14 5d6 6s2"),
    Element::new(77, "Ir", "Iridium", 192.22, TransitionMetal, "[Xe] 4f14 5d7 6s2"),
    Element::new(78, "Pt", "Platinum", 195.08, TransitionMetal, "[Xe] 4f14 5d9 6s1"),
    Element::new(79, "Au", "Gold", 196.97, TransitionMetal, "[Xe] 4f14 5d10 6s1"),
    Element::new(80, "Hg", "Mercury", 200.59, TransitionMetal, "[Xe] 4f14 5d10 6s2"),
    Element::new(81, "Tl", "Thallium", 204.38, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p1"),
    Element::new(82, "Pb", "Lead", 207.2, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p2"),
    Element::new(83, "Bi", "Bismuth", 208.98, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p3"),
    Element::new(84, "Po", "Polonium", 209.0, PostTransitionMetal, "[Xe] 4f14 5d10 6s2 6p4"),
    Element::new(85, "At", "Astatine", 210.0, Halogen, "[Xe] 4f14 5d10 6s2 6p5"),
    Element::new(86, "Rn", "Radon", 222.0, NobleGas, "[Xe] 4f14 5d10 6s2 6p6"),
    Element::new(87, "Fr", "Francium", 223.0, AlkaliMetal, "[Rn] 7s1"),
    Element::new(88, "Ra", "Radium", 226.0, AlkalineEarthMetal, "[Rn] 7s2"),
    Element::new(89, "Ac", "Actinium", 227.0, Actinide, "[Rn] 6d1 7s2"),
    Element::new(90, "Th", "Thorium", 232.04, Actinide, "[Rn] 6d2 7s2"),
    Element::new(91, "Pa", "Protactinium", 231.04, Actinide, "[Rn] 5f2 6d1 7s2"),
    Element::new(92, "U", "Uranium", 238.03, Actinide, "[Rn] 5f3 6d1 7s2"),
    Element::new(93, "Np", "Neptunium", 237.0, Actinide, "[Rn] 5f4 6d1 7s2"),
    Element::new(94, "Pu", "Plutonium", 244.0, Actinide, "[Rn] 5f6 7s2"),
    Element::new(95, "Am", "Americium", 243.0, Actinide, "[Rn] 5f7 7s2"),
    Element::new(96, "Cm", "Curium", 247.0, Actinide, "[Rn] 5f7 6d1 7s2"),
    Element::new(97, "Bk", "Berkelium", 247.0, Actinide, "[Rn] 5f9 7s2"),
    Element::new(98, "Cf", "Californium", 251.0, Actinide, "[Rn] 5f10 7s2"),
    Element::new(99, "Es", "Einsteinium", 252.0, Actinide, "[Rn] 5f11 7s2"),
    Element::new(100, "Fm", "Fermium", 257.0, Actinide, "[Rn] 5f12 7s2"),
    Element::new(101, "Md", "Mendelevium", 258.0, Actinide, "[Rn] 5f13 7s2"),
    Element::new(102, "No", "Nobelium", 259.0, Actinide, "[Rn] 5f14 7s2"),
    Element::new(103, "Lr", "Lawrencium", 266.0, Actinide, "[Rn] 5f14 7s2 7p1"),
    Element::new(104, "Rf", "Rutherfordium", 267.0, TransitionMetal, "[Rn] 5f14 6d2 7s2"),
    Element::new(105, "Db", "Dubnium", 268.0, TransitionMetal, "[Rn] 5f14 6d3 7s2"),
    Element::new(106, "Sg", "Seaborgium", 269.0, TransitionMetal, "[Rn] 5f14 6d4 7s2"),
    Element::new(107, "Bh", "Bohrium", 270.0, TransitionMetal, "[Rn] 5f14 6d5 7s2"),
    Element::new(108, "Hs", "Hassium", 277.0, TransitionMetal, "[Rn] 5f14 6d6 7s2"),
    Element::new(109, "Mt", "Meitnerium", 278.0, Unknown, "[Rn] 5f14 6d7 7s2"),
    Element::new(110, "Ds", "Darmstadtium", 281.0, Unknown, "[Rn] 5f14 6d8 7s2"),
    Element::new(111, "Rg", "Roentgenium", 282.0, Unknown, "[Rn] 5f14 6d9 7s2"),
    Element::new(112, "Cn", "Copernicium", 285.0, TransitionMetal, "[Rn] 5f14 6d10 7s2"),
    Element::new(113, "Nh", "Nihonium", 286.0, Unknown, "[Rn] 5f14 6d10 7s2 7p1"),
    Element::new(114, "Fl", "Flerovium", 289.0, Unknown, "[Rn] 5f14 6d10 7s2 7p2"),
    Element::new(115, "Mc", "Moscovium", 290.0, Unknown, "[Rn] 5f14 6d10 7s2 7p3"),
    Element::new(116, "Lv", "Livermorium", 293.0, Unknown, "[Rn] 5f14 6d10 7s2 7p4"),
    Element::new(117, "Ts", "Tennessine", 294.0, Unknown, "[Rn] 5f14 6d10 7s2 7p5"),
    Element::new(118, "Og", "Oganesson", 294.0, Unknown, "[Rn] 5f14 6d10 7s2 7p6"),
];

// Last atomic number of each period
const PERIOD_ENDS: [u8; 7] = [2, 10, 18, 36, 54, 86, 118];

impl Element {
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        atomic_mass: f32,
        category: ElementCategory,
        electron_configuration: &'static str,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            atomic_mass,
            category,
            electron_configuration,
        }
    }

    pub fn by_atomic_number(z: u8) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.atomic_number == z)
            .cloned()
    }

    pub fn by_symbol(symbol: &str) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
            .cloned()
    }

    pub fn by_name(name: &str) -> Option<Self> {
        ELEMENTS
            .iter()
            .find(|element| element.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Resolves an atomic number, symbol or English name.
    pub fn lookup(query: &str) -> Option<Self> {
        let query = query.trim();
        match query.parse::<u8>() {
            Ok(z) => Self::by_atomic_number(z),
            Err(_) => Self::by_symbol(query).or_else(|| Self::by_name(query)),
        }
    }

    pub fn all() -> &'static [Element] {
        &ELEMENTS
    }

    pub fn period(&self) -> u8 {
        PERIOD_ENDS
            .iter()
            .position(|&end| self.atomic_number <= end)
            .map_or(7, |index| index as u8 + 1)
    }

    /// Tile position on the table as `(column, row)`.
    ///
    /// Columns run 1..=18. Rows 1..=7 are the periods; the lanthanide and
    /// actinide strips sit on rows 9 and 10, starting under column 3.
    pub fn grid_position(&self) -> (u8, u8) {
        let period = self.period();
        let first = match period {
            1 => 1,
            p => PERIOD_ENDS[usize::from(p) - 2] + 1,
        };
        let index = self.atomic_number - first;

        match period {
            1 => (if index == 0 { 1 } else { 18 }, 1),
            2 | 3 => (if index < 2 { index + 1 } else { index + 11 }, period),
            4 | 5 => (index + 1, period),
            _ => match index {
                0..=1 => (index + 1, period),
                2..=16 => (index + 1, period + 3),
                _ => (index - 13, period),
            },
        }
    }

    /// IUPAC group, `None` for the f-block strips.
    pub fn group(&self) -> Option<u8> {
        let (column, row) = self.grid_position();
        (row <= 7).then_some(column)
    }

    /// Explicit subshells of the ground-state configuration.
    pub fn subshells(&self) -> Vec<SubshellToken> {
        configuration::expand(self.electron_configuration)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}
