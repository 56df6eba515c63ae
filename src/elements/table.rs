//! Built-in element records.
//!
//! Colors are RGBA, radii are in angstroms as `[used, covalent, atomic]`, and
//! ionic radii are `(charge_state, radius)` pairs. The last three records are
//! the vacancy, default and stick entries that [`super::ElementTable`] relies
//! on for fallbacks.

/// Static form of an element record, converted to
/// [`super::ElementProp`] when the registry is built.
pub(super) struct ElementRecord {
    pub(super) number: u32,
    pub(super) name: &'static str,
    pub(super) short_name: &'static str,
    pub(super) color: [f32; 4],
    pub(super) radii: [f32; 3],
    pub(super) ionic_radii: &'static [(i32, f32)],
}

const fn rec(
    number: u32,
    name: &'static str,
    short_name: &'static str,
    color: [f32; 4],
    radii: [f32; 3],
    ionic_radii: &'static [(i32, f32)],
) -> ElementRecord {
    ElementRecord {
        number,
        name,
        short_name,
        color,
        radii,
        ionic_radii,
    }
}

#[rustfmt::skip]
pub(super) const ELEMENTS_DEFAULT: &[ElementRecord] = &[
    rec(1, "Hydrogen", "H", [1.0, 1.0, 1.0, 1.0], [0.32, 0.32, 0.79], &[(-1, 1.54)]),
    rec(2, "Helium", "He", [0.85, 1.0, 1.0, 1.0], [0.93, 0.93, 0.49], &[]),
    rec(3, "Lithium", "Li", [0.8, 0.50, 1.0, 1.0], [1.23, 1.23, 2.05], &[(1, 0.68)]),
    rec(4, "Beryllium", "Be", [0.76, 1.0, 0.0, 1.0], [0.90, 0.90, 1.40], &[(1, 0.44), (2, 0.35)]),
    rec(5, "Boron", "B", [1.0, 0.70, 0.70, 1.0], [0.82, 0.82, 1.17], &[(1, 0.35), (3, 0.23)]),
    rec(6, "Carbon", "C", [0.56, 0.56, 0.56, 1.0], [0.77, 0.77, 0.91], &[(-4, 2.60), (4, 0.16)]),
    rec(7, "Nitrogen", "N", [0.18, 0.31, 0.97, 1.0], [0.75, 0.75, 0.75], &[(-3, 1.71), (1, 0.25), (3, 0.16), (5, 0.13)]),
    rec(8, "Oxygen", "O", [1.0, 0.05, 0.05, 1.0], [0.73, 0.73, 0.65], &[(-2, 1.32), (-1, 1.76), (1, 0.22), (6, 0.09)]),
    rec(9, "Fluorine", "F", [0.56, 0.87, 0.31, 1.0], [0.72, 0.72, 0.57], &[(-1, 1.33), (7, 0.08)]),
    rec(10, "Neon", "Ne", [0.70, 0.89, 0.96, 1.0], [0.71, 0.71, 0.51], &[(1, 1.12)]),
    rec(11, "Sodium", "Na", [0.67, 0.36, 0.94, 1.0], [1.54, 1.54, 2.23], &[(1, 0.97)]),
    rec(12, "Magnesium", "Mg", [0.54, 1.0, 0.0, 1.0], [1.36, 1.36, 1.72], &[(1, 0.82), (2, 0.66)]),
    rec(13, "Aluminium", "Al", [0.74, 0.65, 0.65, 1.0], [1.18, 1.18, 1.82], &[(3, 0.51)]),
    rec(14, "Silicon", "Si", [0.94, 0.78, 0.62, 1.0], [1.11, 1.11, 1.46], &[(-4, 2.71), (-1, 3.84), (1, 0.65), (4, 0.42)]),
    rec(15, "Phosphorus", "P", [1.0, 0.50, 0.0, 1.0], [1.06, 1.06, 1.23], &[(-3, 2.12), (3, 0.44), (5, 0.35)]),
    rec(16, "Sulfur", "S", [1.0, 1.0, 0.18, 1.0], [1.02, 1.02, 1.09], &[(-2, 1.84), (2, 2.19), (4, 0.37), (6, 0.30)]),
    rec(17, "Chlorine", "Cl", [0.12, 0.94, 0.12, 1.0], [0.99, 0.99, 0.97], &[(-1, 1.81), (5, 0.34), (7, 0.27)]),
    rec(18, "Argon", "Ar", [0.50, 0.81, 0.89, 1.0], [0.98, 0.98, 0.88], &[(1, 1.54)]),
    rec(19, "Potassium", "K", [0.56, 0.25, 0.83, 1.0], [2.03, 2.03, 2.77], &[(1, 0.81)]),
    rec(20, "Calcium", "Ca", [0.23, 1.0, 0.0, 1.0], [1.74, 1.74, 2.23], &[(1, 1.18), (2, 0.99)]),
    rec(21, "Scandium", "Sc", [0.90, 0.90, 0.90, 1.0], [1.44, 1.44, 2.09], &[(3, 0.73)]),
    rec(22, "Titanium", "Ti", [0.74, 0.76, 0.78, 1.0], [1.32, 1.32, 2.00], &[(1, 0.96), (2, 0.94), (3, 0.76), (4, 0.68)]),
    rec(23, "Vanadium", "V", [0.65, 0.65, 0.67, 1.0], [1.22, 1.22, 1.92], &[(2, 0.88), (3, 0.74), (4, 0.63), (5, 0.59)]),
    rec(24, "Chromium", "Cr", [0.54, 0.6, 0.78, 1.0], [1.18, 1.18, 1.85], &[(1, 0.81), (2, 0.89), (3, 0.63), (6, 0.52)]),
    rec(25, "Manganese", "Mn", [0.61, 0.47, 0.78, 1.0], [1.17, 1.17, 1.79], &[(2, 0.80), (3, 0.66), (4, 0.60), (7, 0.46)]),
    rec(26, "Iron", "Fe", [0.87, 0.4, 0.2, 1.0], [1.17, 1.17, 1.72], &[(2, 0.74), (3, 0.64)]),
    rec(27, "Cobalt", "Co", [0.94, 0.56, 0.62, 1.0], [1.16, 1.16, 1.67], &[(2, 0.72), (3, 0.63)]),
    rec(28, "Nickel", "Ni", [0.31, 0.81, 0.31, 1.0], [1.15, 1.15, 1.62], &[(2, 0.69)]),
    rec(29, "Copper", "Cu", [0.78, 0.50, 0.2, 1.0], [1.17, 1.17, 1.57], &[(1, 0.96), (2, 0.72)]),
    rec(30, "Zinc", "Zn", [0.49, 0.50, 0.69, 1.0], [1.25, 1.25, 1.53], &[(1, 0.88), (2, 0.74)]),
    rec(31, "Gallium", "Ga", [0.76, 0.56, 0.56, 1.0], [1.26, 1.26, 1.81], &[(1, 0.81), (3, 0.62)]),
    rec(32, "Germanium", "Ge", [0.4, 0.56, 0.56, 1.0], [1.22, 1.22, 1.52], &[(-4, 2.72), (2, 0.73), (4, 0.53)]),
    rec(33, "Arsenic", "As", [0.74, 0.50, 0.89, 1.0], [1.20, 1.20, 1.33], &[(-3, 2.22), (3, 0.58), (5, 0.46)]),
    rec(34, "Selenium", "Se", [1.0, 0.63, 0.0, 1.0], [1.16, 1.16, 1.22], &[(-2, 1.91), (-1, 2.32), (1, 0.66), (4, 0.50), (6, 0.42)]),
    rec(35, "Bromine", "Br", [0.65, 0.16, 0.16, 1.0], [1.14, 1.14, 1.12], &[(-1, 1.96), (5, 0.47), (7, 0.39)]),
    rec(36, "Krypton", "Kr", [0.36, 0.72, 0.81, 1.0], [1.31, 1.31, 1.24], &[]),
    rec(37, "Rubidium", "Rb", [0.43, 0.18, 0.69, 1.0], [2.16, 2.16, 2.98], &[(1, 1.47)]),
    rec(38, "Strontium", "Sr", [0.0, 1.0, 0.0, 1.0], [1.91, 1.91, 2.45], &[(2, 1.12)]),
    rec(39, "Yttrium", "Y", [0.58, 1.0, 1.0, 1.0], [1.62, 1.62, 2.27], &[(3, 0.89)]),
    rec(40, "Zirconium", "Zr", [0.58, 0.87, 0.87, 1.0], [1.45, 1.45, 2.16], &[(1, 1.09), (4, 0.79)]),
    rec(41, "Niobium", "Nb", [0.45, 0.76, 0.78, 1.0], [1.34, 1.34, 2.08], &[(1, 1.00), (4, 0.74), (5, 0.69)]),
    rec(42, "Molybdenum", "Mo", [0.32, 0.70, 0.70, 1.0], [1.30, 1.30, 2.01], &[(1, 0.93), (4, 0.70), (6, 0.62)]),
    rec(43, "Technetium", "Tc", [0.23, 0.61, 0.61, 1.0], [1.27, 1.27, 1.95], &[(7, 0.97)]),
    rec(44, "Ruthenium", "Ru", [0.14, 0.56, 0.56, 1.0], [1.25, 1.25, 1.89], &[(4, 0.67)]),
    rec(45, "Rhodium", "Rh", [0.03, 0.49, 0.54, 1.0], [1.25, 1.25, 1.83], &[(3, 0.68)]),
    rec(46, "Palladium", "Pd", [0.0, 0.41, 0.52, 1.0], [1.28, 1.28, 1.79], &[(2, 0.80), (4, 0.65)]),
    rec(47, "Silver", "Ag", [0.75, 0.75, 0.75, 1.0], [1.34, 1.34, 1.75], &[(1, 1.26), (2, 0.89)]),
    rec(48, "Cadmium", "Cd", [1.0, 0.85, 0.56, 1.0], [1.48, 1.48, 1.71], &[(1, 1.14), (2, 0.97)]),
    rec(49, "Indium", "In", [0.65, 0.45, 0.45, 1.0], [1.44, 1.44, 2.00], &[(3, 0.81)]),
    rec(50, "Tin", "Sn", [0.4, 0.50, 0.50, 1.0], [1.41, 1.41, 1.72], &[(-4, 2.94), (-1, 3.70), (2, 0.93), (4, 0.71)]),
    rec(51, "Antimony", "Sb", [0.61, 0.38, 0.70, 1.0], [1.40, 1.40, 1.53], &[(-3, 2.45), (3, 0.76), (5, 0.62)]),
    rec(52, "Tellurium", "Te", [0.83, 0.47, 0.0, 1.0], [1.36, 1.36, 1.42], &[(-2, 2.11), (-1, 2.50), (1, 0.82), (4, 0.70), (6, 0.56)]),
    rec(53, "Iodine", "I", [0.58, 0.0, 0.58, 1.0], [1.33, 1.33, 1.32], &[(-1, 2.20), (5, 0.62), (7, 0.50)]),
    rec(54, "Xenon", "Xe", [0.25, 0.61, 0.69, 1.0], [1.31, 1.31, 1.24], &[]),
    rec(55, "Caesium", "Cs", [0.34, 0.09, 0.56, 1.0], [2.35, 2.35, 3.35], &[(1, 1.67)]),
    rec(56, "Barium", "Ba", [0.0, 0.78, 0.0, 1.0], [1.98, 1.98, 2.78], &[(1, 1.53), (2, 1.34)]),
    rec(57, "Lanthanum", "La", [0.43, 0.83, 1.0, 1.0], [1.69, 1.69, 2.74], &[(1, 1.39), (3, 1.06)]),
    rec(58, "Cerium", "Ce", [1.0, 1.0, 0.78, 1.0], [1.65, 1.65, 2.70], &[(1, 1.27), (3, 1.03), (4, 0.92)]),
    rec(59, "Praseodymium", "Pr", [0.85, 1.0, 0.78, 1.0], [1.65, 1.65, 2.67], &[(3, 1.01), (4, 0.90)]),
    rec(60, "Neodymium", "Nd", [0.78, 1.0, 0.78, 1.0], [1.64, 1.64, 2.64], &[(3, 0.99)]),
    rec(61, "Promethium", "Pm", [0.63, 1.0, 0.78, 1.0], [1.63, 1.63, 2.62], &[(3, 0.97)]),
    rec(62, "Samarium", "Sm", [0.56, 1.0, 0.78, 1.0], [1.62, 1.62, 2.59], &[(3, 0.96)]),
    rec(63, "Europium", "Eu", [0.38, 1.0, 0.78, 1.0], [1.85, 1.85, 2.56], &[(2, 1.09), (3, 0.95)]),
    rec(64, "Gadolinium", "Gd", [0.27, 1.0, 0.78, 1.0], [1.61, 1.61, 2.54], &[(3, 0.93)]),
    rec(65, "Terbium", "Tb", [0.18, 1.0, 0.78, 1.0], [1.59, 1.59, 2.51], &[(3, 0.92), (4, 0.84)]),
    rec(66, "Dysprosium", "Dy", [0.12, 1.0, 0.78, 1.0], [1.59, 1.59, 2.49], &[(3, 0.90)]),
    rec(67, "Holmium", "Ho", [0.0, 1.0, 0.61, 1.0], [1.58, 1.58, 2.47], &[(3, 0.89)]),
    rec(68, "Erbium", "Er", [0.0, 0.90, 0.45, 1.0], [1.57, 1.57, 2.45], &[(3, 0.88)]),
    rec(69, "Thulium", "Tm", [0.0, 0.83, 0.32, 1.0], [1.56, 1.56, 2.42], &[(3, 0.87)]),
    rec(70, "Ytterbium", "Yb", [0.0, 0.74, 0.21, 1.0], [1.74, 1.74, 2.40], &[(2, 0.93), (3, 0.85)]),
    rec(71, "Lutetium", "Lu", [0.0, 0.67, 0.14, 1.0], [1.56, 1.56, 2.25], &[(3, 0.85)]),
    rec(72, "Hafnium", "Hf", [0.30, 0.76, 1.0, 1.0], [1.44, 1.44, 2.16], &[(4, 0.78)]),
    rec(73, "Tantalum", "Ta", [0.30, 0.65, 1.0, 1.0], [1.34, 1.34, 2.09], &[(5, 0.68)]),
    rec(74, "Tungsten", "W", [0.12, 0.58, 0.83, 1.0], [1.30, 1.30, 2.02], &[(4, 0.70), (6, 0.62)]),
    rec(75, "Rhenium", "Re", [0.14, 0.49, 0.67, 1.0], [1.28, 1.28, 1.97], &[(4, 0.72), (7, 0.56)]),
    rec(76, "Osmium", "Os", [0.14, 0.4, 0.58, 1.0], [1.26, 1.26, 1.92], &[(4, 0.88), (6, 0.69)]),
    rec(77, "Iridium", "Ir", [0.09, 0.32, 0.52, 1.0], [1.27, 1.27, 1.87], &[(4, 0.68)]),
    rec(78, "Platinum", "Pt", [0.81, 0.81, 0.87, 1.0], [1.30, 1.30, 1.83], &[(2, 0.80), (4, 0.65)]),
    rec(79, "Gold", "Au", [1.0, 0.81, 0.13, 1.0], [1.34, 1.34, 1.79], &[(1, 1.37), (3, 0.85)]),
    rec(80, "Mercury", "Hg", [0.72, 0.72, 0.81, 1.0], [1.49, 1.49, 1.76], &[(1, 1.27), (2, 1.10)]),
    rec(81, "Thallium", "Tl", [0.65, 0.32, 0.30, 1.0], [1.48, 1.48, 2.08], &[(1, 1.47), (3, 0.95)]),
    rec(82, "Lead", "Pb", [0.34, 0.34, 0.38, 1.0], [1.47, 1.47, 1.81], &[(2, 1.20), (4, 0.84)]),
    rec(83, "Bismuth", "Bi", [0.61, 0.30, 0.70, 1.0], [1.46, 1.46, 1.63], &[(1, 0.98), (3, 0.96), (5, 0.74)]),
    rec(84, "Polonium", "Po", [0.67, 0.36, 0.0, 1.0], [1.46, 1.46, 1.53], &[(6, 0.67)]),
    rec(85, "Astatine", "At", [0.45, 0.30, 0.27, 1.0], [1.45, 1.45, 1.43], &[(-3, 2.22), (3, 0.85), (5, 0.46)]),
    rec(86, "Radon", "Rn", [0.25, 0.50, 0.58, 1.0], [1.00, 1.00, 1.34], &[]),
    rec(87, "Francium", "Fr", [0.25, 0.0, 0.4, 1.0], [1.00, 1.00, 1.00], &[(1, 1.80)]),
    rec(88, "Radium", "Ra", [0.0, 0.49, 0.0, 1.0], [1.00, 1.00, 1.00], &[(2, 1.43)]),
    rec(89, "Actinium", "Ac", [0.43, 0.67, 0.98, 1.0], [1.00, 1.00, 1.00], &[(3, 1.18)]),
    rec(90, "Thorium", "Th", [0.0, 0.72, 1.0, 1.0], [1.65, 1.65, 1.00], &[(4, 1.02)]),
    rec(91, "Protactinium", "Pa", [0.0, 0.63, 1.0, 1.0], [1.00, 1.00, 1.00], &[(3, 1.13), (4, 0.98), (5, 0.89)]),
    rec(92, "Uranium", "U", [0.0, 0.56, 1.0, 1.0], [1.42, 1.42, 1.00], &[(4, 0.97), (6, 0.80)]),
    rec(93, "Neptunium", "Np", [0.0, 0.50, 1.0, 1.0], [1.00, 1.00, 1.00], &[(3, 1.10), (4, 0.95), (7, 0.71)]),
    rec(94, "Plutonium", "Pu", [0.0, 0.41, 1.0, 1.0], [1.00, 1.00, 1.00], &[(3, 1.08), (4, 0.93)]),
    rec(95, "Americium", "Am", [0.32, 0.36, 0.94, 1.0], [1.00, 1.00, 1.00], &[(3, 1.07), (4, 0.92)]),
    rec(96, "Curium", "Cm", [0.47, 0.36, 0.89, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(97, "Berkelium", "Bk", [0.54, 0.30, 0.89, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(98, "Californium", "Cf", [0.63, 0.21, 0.83, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(99, "Einsteinium", "Es", [0.70, 0.12, 0.83, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(100, "Fermium", "Fm", [0.70, 0.12, 0.72, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(101, "Mendelevium", "Md", [0.70, 0.05, 0.65, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(102, "Nobelium", "No", [0.74, 0.05, 0.52, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(103, "Lawrencium", "Lr", [0.78, 0.0, 0.4, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(104, "Vacancy", "Vac", [0.5, 0.5, 0.5, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(105, "Default", "Default", [1.0, 1.0, 1.0, 1.0], [1.00, 1.00, 1.00], &[]),
    rec(106, "Stick", "Stick", [0.5, 0.5, 0.5, 1.0], [1.00, 1.00, 1.00], &[]),
];
