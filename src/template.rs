//! Starter catalog for a new residential budget.

use obra_types::LineItem;
use rust_decimal::Decimal;

// (code, description, unit, unit price in cents)
const STARTER_CATALOG: [(&str, &str, &str, i64); 21] = [
    ("DEM-001", "Limpieza y trazo de terreno", "m²", 80),
    ("MOV-001", "Excavación manual zanjas cimentación", "m³", 1050),
    ("CIM-001", "Cimentación corrida hormigón ciclópeo", "m³", 8500),
    ("EST-001", "Columna de hormigón armado f'c=210 kg/cm²", "m³", 16500),
    ("EST-002", "Viga/Cadena de amarre f'c=210 kg/cm²", "m³", 16000),
    ("EST-003", "Losa maciza de hormigón armado 12 cm", "m²", 2400),
    ("MAN-001", "Muro bloque cemento 15 cm", "m²", 1850),
    ("MAN-002", "Tabique interior bloque 10 cm", "m²", 1600),
    ("INS-001", "Instalación sanitaria baño completo", "ud", 32000),
    ("INS-002", "Instalación eléctrica vivienda tipo (hasta 60 m²)", "ud", 38000),
    ("ACB-001", "Piso cerámico económico", "m²", 1150),
    ("ACB-002", "Revestimiento cerámico pared (baño/cocina)", "m²", 1350),
    ("ACB-003", "Enlucido y pintura interior", "m²", 680),
    ("ACB-004", "Pintura exterior", "m²", 750),
    ("CAR-001", "Puerta metálica simple", "ud", 14000),
    ("CAR-002", "Ventana metálica c/vidrio 1.20x1.00", "ud", 12000),
    ("CBT-001", "Estructura metálica para cubierta liviana", "m²", 1800),
    ("CBT-002", "Cubierta teja fibrocemento", "m²", 1200),
    ("IMP-001", "Impermeabilización losa expuesta", "m²", 950),
    ("EXT-001", "Cerramiento perimetral en bloque", "m²", 1900),
    ("EXT-002", "Acceso peatonal hormigón simple", "m²", 1000),
];

/// The residential starter items in USD, every quantity zero.
pub fn starter_items() -> Vec<LineItem> {
    STARTER_CATALOG
        .iter()
        .map(|&(code, description, unit, cents)| {
            LineItem::new(code, description, unit, Decimal::new(cents, 2))
        })
        .collect()
}
