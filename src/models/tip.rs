//! Financial tips and session profiles
//!
//! The tip catalogs are static, localized for Colombia, and fixed at build
//! time: ten tips for individuals and twelve for couples.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinanzError;

/// Topic a tip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Communication,
    Housing,
    Transport,
    Food,
    Health,
    Education,
    Savings,
    Services,
    Shopping,
    Credit,
    Goals,
    Budget,
}

/// A single financial tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub description: &'static str,
    pub category: TipCategory,
}

/// Who the budget is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Individual,
    Couple,
}

impl Profile {
    /// Number of income contributors in this profile
    pub const fn contributor_count(&self) -> usize {
        match self {
            Self::Individual => 1,
            Self::Couple => 2,
        }
    }

    /// Tip catalog for this profile
    pub fn catalog(&self) -> &'static [Tip] {
        match self {
            Self::Individual => &INDIVIDUAL_TIPS,
            Self::Couple => &COUPLE_TIPS,
        }
    }

    /// How many tips are shown after a computation
    pub const fn default_tip_count(&self) -> usize {
        match self {
            Self::Individual => 4,
            Self::Couple => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Couple => "couple",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Profile {
    type Err = FinanzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" | "single" => Ok(Self::Individual),
            "couple" | "pareja" => Ok(Self::Couple),
            other => Err(FinanzError::Config(format!("Unknown profile: {}", other))),
        }
    }
}

const fn tip(title: &'static str, description: &'static str, category: TipCategory) -> Tip {
    Tip {
        title,
        description,
        category,
    }
}

/// Tips for a single earner
pub static INDIVIDUAL_TIPS: [Tip; 10] = [
    tip(
        "🏠 Vivienda: Máximo 30% del ingreso",
        "En Colombia, destinar más del 30% a vivienda puede comprometer tu estabilidad financiera. Considera opciones como arriendo compartido o vivienda VIS.",
        TipCategory::Housing,
    ),
    tip(
        "🚌 Transporte: Optimiza tus gastos",
        "Usa TransMilenio, SITP o bicicleta en Bogotá. En otras ciudades, evalúa si conviene tener carro vs transporte público según tu ubicación.",
        TipCategory::Transport,
    ),
    tip(
        "🍽️ Alimentación: Planifica tus compras",
        "Compra en mercados locales, aprovecha ofertas de supermercados y cocina en casa. Evita comer fuera más de 2-3 veces por semana.",
        TipCategory::Food,
    ),
    tip(
        "💊 Salud: Prioriza tu bienestar",
        "Mantén tu EPS al día y considera un seguro complementario. Invierte en prevención: ejercicio, buena alimentación y chequeos regulares.",
        TipCategory::Health,
    ),
    tip(
        "🎓 Educación: Invierte en tu futuro",
        "Destina parte de tu presupuesto a cursos, certificaciones o estudios que mejoren tu perfil profesional y aumenten tus ingresos futuros.",
        TipCategory::Education,
    ),
    tip(
        "💰 Ahorro: Construye tu colchón",
        "Ahorra al menos 3-6 meses de gastos en tu fondo de emergencia. Considera CDT, fondos de inversión colectiva o cuentas de ahorro programado.",
        TipCategory::Savings,
    ),
    tip(
        "📱 Servicios: Revisa tus suscripciones",
        "Evalúa si realmente necesitas Netflix, Spotify Premium, y otras suscripciones. Cancela las que no uses regularmente.",
        TipCategory::Services,
    ),
    tip(
        "🛒 Compras: Evita el impulso",
        "Antes de comprar, espera 24 horas. Pregúntate si realmente lo necesitas y si puedes pagarlo sin afectar tu presupuesto mensual.",
        TipCategory::Shopping,
    ),
    tip(
        "💳 Tarjetas: Usa el crédito inteligentemente",
        "Paga el total de tus tarjetas cada mes. Si no puedes, no uses crédito. Las tasas de interés en Colombia son muy altas.",
        TipCategory::Credit,
    ),
    tip(
        "🎯 Metas: Define objetivos claros",
        "Establece metas financieras específicas: viaje, casa, negocio. Divide el costo total entre los meses para saber cuánto ahorrar mensualmente.",
        TipCategory::Goals,
    ),
];

/// Tips for couples sharing a budget
pub static COUPLE_TIPS: [Tip; 12] = [
    tip(
        "💑 Comunicación Financiera Abierta",
        "Mantén conversaciones regulares sobre finanzas. En Colombia, muchas parejas evitan hablar de dinero, pero la transparencia es clave para el éxito financiero conjunto.",
        TipCategory::Communication,
    ),
    tip(
        "🏠 Vivienda Compartida: Máximo 35% del ingreso total",
        "Como pareja, pueden destinar hasta 35% del ingreso combinado a vivienda. Consideren opciones como vivienda VIS, arriendo compartido o compra conjunta.",
        TipCategory::Housing,
    ),
    tip(
        "🚗 Transporte: Evalúen opciones conjuntas",
        "Analicen si conviene tener un carro compartido vs transporte público. En Bogotá, TransMilenio + Uber puede ser más económico que mantener un vehículo.",
        TipCategory::Transport,
    ),
    tip(
        "🍽️ Alimentación: Cocinen juntos para ahorrar",
        "Planifiquen comidas semanales y compren en mercados locales. Cocinar juntos no solo ahorra dinero, sino que fortalece la relación.",
        TipCategory::Food,
    ),
    tip(
        "💊 Salud: EPS compartida y seguros complementarios",
        "Si ambos trabajan, evalúen cuál EPS tiene mejor cobertura. Consideren un seguro complementario conjunto para mayor protección.",
        TipCategory::Health,
    ),
    tip(
        "🎓 Educación: Inviertan en su futuro conjunto",
        "Destinen parte del presupuesto a cursos o estudios que beneficien a ambos. La educación es la mejor inversión para el futuro de la pareja.",
        TipCategory::Education,
    ),
    tip(
        "💰 Ahorro Conjunto: Construyan metas compartidas",
        "Establezcan metas de ahorro conjuntas: viajes, casa, negocio. Usen cuentas de ahorro programado o fondos de inversión colectiva.",
        TipCategory::Savings,
    ),
    tip(
        "📱 Servicios: Compartan suscripciones",
        "Evalúen qué servicios realmente necesitan como pareja. Netflix, Spotify, y otras plataformas ofrecen planes familiares más económicos.",
        TipCategory::Services,
    ),
    tip(
        "🛒 Compras: Tomen decisiones conjuntas",
        "Para compras importantes, esperen 24-48 horas y decidan juntos. Eviten compras impulsivas que afecten el presupuesto conjunto.",
        TipCategory::Shopping,
    ),
    tip(
        "💳 Tarjetas: Manejen el crédito responsablemente",
        "Si usan tarjetas de crédito, paguen el total cada mes. Las tasas de interés en Colombia son muy altas y pueden afectar su futuro conjunto.",
        TipCategory::Credit,
    ),
    tip(
        "🎯 Metas Financieras: Planifiquen juntos",
        "Definan metas a corto, mediano y largo plazo. Dividan el costo total entre los meses para saber cuánto ahorrar mensualmente como pareja.",
        TipCategory::Goals,
    ),
    tip(
        "📊 Presupuesto Mensual: Revisen juntos",
        "Reúnanse mensualmente para revisar gastos y ajustar el presupuesto. La consistencia es clave para el éxito financiero conjunto.",
        TipCategory::Budget,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Profile::Individual.catalog().len(), 10);
        assert_eq!(Profile::Couple.catalog().len(), 12);
    }

    #[test]
    fn test_catalog_titles_unique() {
        for profile in [Profile::Individual, Profile::Couple] {
            let titles: HashSet<_> = profile.catalog().iter().map(|t| t.title).collect();
            assert_eq!(titles.len(), profile.catalog().len());
        }
    }

    #[test]
    fn test_profile_parameters() {
        assert_eq!(Profile::Individual.contributor_count(), 1);
        assert_eq!(Profile::Couple.contributor_count(), 2);
        assert_eq!(Profile::Individual.default_tip_count(), 4);
        assert_eq!(Profile::Couple.default_tip_count(), 6);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("couple".parse::<Profile>().unwrap(), Profile::Couple);
        assert_eq!("Pareja".parse::<Profile>().unwrap(), Profile::Couple);
        assert_eq!("individual".parse::<Profile>().unwrap(), Profile::Individual);
        assert!("trio".parse::<Profile>().is_err());
    }

    #[test]
    fn test_tip_serialization() {
        let json = serde_json::to_value(INDIVIDUAL_TIPS[0]).unwrap();
        assert_eq!(json["category"], "housing");
    }
}
