//! Fixed survey data for the two thesis analyses.
//!
//! Every figure here is a literal lifted from the underlying SPSS output:
//! Likert response distributions per region, chi-square test tables with
//! their footnotes, and the interpretation paragraphs per aspect. Nothing
//! is computed at runtime and nothing is ever mutated.

pub const PAGE_TITLE: &str = "Thesis Research";

/// Region order used everywhere: bar series, colors, value columns.
pub const REGIONS: [&str; 2] = ["North America", "Latin America"];

/// One Likert category with its percentage per region, in [`REGIONS`] order.
#[derive(Debug, Clone, Copy)]
pub struct SurveyResponseRow {
    pub label: &'static str,
    pub values: [f64; 2],
}

/// One line of a chi-square test table. `df` and `significance` may be
/// empty (the "N de casos válidos" row carries neither).
#[derive(Debug, Clone, Copy)]
pub struct ChiSquareRow {
    pub test: &'static str,
    pub value: &'static str,
    pub df: &'static str,
    pub significance: &'static str,
}

/// A chi-square table plus the footnote printed under it.
#[derive(Debug, Clone, Copy)]
pub struct ChiSquareTable {
    pub rows: &'static [ChiSquareRow],
    pub note: &'static str,
}

/// Interpretive lens on an analysis. Keys of an [`InterpretationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    Overall,
    Regional,
    Disagreement,
    Neutral,
}

impl Aspect {
    pub const ALL: [Aspect; 4] = [
        Aspect::Overall,
        Aspect::Regional,
        Aspect::Disagreement,
        Aspect::Neutral,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Aspect::Overall => "overall",
            Aspect::Regional => "regional",
            Aspect::Disagreement => "disagreement",
            Aspect::Neutral => "neutral",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Aspect-keyed interpretation paragraphs.
///
/// Lookup is total: an aspect missing from the entries falls back to the
/// first entry instead of panicking, so the selector buttons and the
/// displayed paragraph can never diverge even if the tables are edited
/// independently.
#[derive(Debug, Clone, Copy)]
pub struct InterpretationSet {
    entries: &'static [(Aspect, &'static str)],
}

impl InterpretationSet {
    pub const fn new(entries: &'static [(Aspect, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn get(&self, aspect: Aspect) -> &'static str {
        self.entries
            .iter()
            .find(|(a, _)| *a == aspect)
            .map(|(_, text)| *text)
            .or_else(|| self.entries.first().map(|(_, text)| *text))
            .unwrap_or("")
    }

    pub fn contains(&self, aspect: Aspect) -> bool {
        self.entries.iter().any(|(a, _)| *a == aspect)
    }

    pub fn aspects(&self) -> impl Iterator<Item = Aspect> + '_ {
        self.entries.iter().map(|(a, _)| *a)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything one sidebar section displays: chart data, interpretation
/// paragraphs, and the chi-square table.
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    pub title: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub question: &'static str,
    pub responses: &'static [SurveyResponseRow],
    pub interpretations: InterpretationSet,
    pub chi_square: ChiSquareTable,
}

pub static ANALYSES: [Analysis; 2] = [CERTIFICATE_COMPLETION, DISSATISFACTION_ABANDONMENT];

pub const CERTIFICATE_COMPLETION: Analysis = Analysis {
    title: "Certificado de conclusión",
    icon: "🎓",
    heading: "Análisis de Certificado de Conclusión",
    question: "Si la plataforma me ofrece un certificado de finalización del curso, me siento más motivado para completar",
    responses: &[
        SurveyResponseRow { label: "Strongly disagree", values: [2.5, 5.9] },
        SurveyResponseRow { label: "Disagree", values: [6.9, 3.8] },
        SurveyResponseRow { label: "Neither agree nor disagree", values: [18.1, 10.6] },
        SurveyResponseRow { label: "Agree", values: [41.6, 37.3] },
        SurveyResponseRow { label: "Strongly agree", values: [30.8, 42.4] },
    ],
    interpretations: InterpretationSet::new(&[
        (Aspect::Overall, "En general, se observa una tendencia positiva hacia la motivación proporcionada por los certificados de finalización. Tanto en América del Norte como en América Latina, la mayoría de los participantes están de acuerdo o muy de acuerdo con que un certificado los motiva más a completar el curso."),
        (Aspect::Regional, "Existen diferencias notables entre las regiones. Los participantes de América Latina muestran una tendencia más fuerte a estar 'Muy de acuerdo' (42.4%) en comparación con América del Norte (30.8%). Esto sugiere que los certificados podrían ser un incentivo particularmente efectivo en América Latina."),
        (Aspect::Disagreement, "El desacuerdo con la afirmación es relativamente bajo en ambas regiones, con solo un 9.4% en América del Norte y un 9.7% en América Latina en desacuerdo o muy en desacuerdo. Esto indica que la mayoría de los estudiantes valoran los certificados como motivadores."),
        (Aspect::Neutral, "Hay un porcentaje significativo de respuestas neutras, especialmente en América del Norte (18.1%). Esto podría indicar que algunos estudiantes no están seguros del valor de los certificados o que otros factores son más importantes para su motivación."),
    ]),
    chi_square: ChiSquareTable {
        rows: &[
            ChiSquareRow { test: "Chi-cuadrado de Pearson", value: "34.997ᵃ", df: "4", significance: "<.001" },
            ChiSquareRow { test: "Razón de verosimilitud", value: "35.456", df: "4", significance: "<.001" },
            ChiSquareRow { test: "Asociación lineal por lineal", value: "12.522", df: "1", significance: "<.001" },
            ChiSquareRow { test: "N de casos válidos", value: "1109", df: "", significance: "" },
        ],
        note: "ᵃ 0 casillas (0.0%) han esperado un recuento menor que 5. El recuento mínimo esperado es 22.69.",
    },
};

pub const DISSATISFACTION_ABANDONMENT: Analysis = Analysis {
    title: "Insatisfacción x Abandono",
    icon: "🚫",
    heading: "Análisis de Insatisfacción y Abandono",
    question: "Si siento que lo que obtengo es menos de lo que pensé que obtendría cuando me inscribí, dejo el curso de inmediato",
    responses: &[
        SurveyResponseRow { label: "Strongly disagree", values: [4.4, 10.2] },
        SurveyResponseRow { label: "Disagree", values: [17.3, 22.3] },
        SurveyResponseRow { label: "Neither agree nor disagree", values: [26.9, 29.3] },
        SurveyResponseRow { label: "Agree", values: [38.1, 27.1] },
        SurveyResponseRow { label: "Strongly agree", values: [13.3, 11.2] },
    ],
    interpretations: InterpretationSet::new(&[
        (Aspect::Overall, "En general, se observa una tendencia mixta en cuanto a la disposición de los estudiantes a abandonar el curso si sienten que obtienen menos de lo esperado. Hay una distribución variada de respuestas en ambas regiones, lo que sugiere que este factor afecta de manera diferente a distintos grupos de estudiantes."),
        (Aspect::Regional, "Existen algunas diferencias notables entre las regiones. Los estudiantes de América del Norte muestran una mayor tendencia a estar de acuerdo (38.1%) en comparación con los de América Latina (27.1%). Esto podría indicar que los estudiantes norteamericanos son más propensos a abandonar el curso si no cumple con sus expectativas."),
        (Aspect::Disagreement, "Un porcentaje significativo en ambas regiones está en desacuerdo con la afirmación (21.7% en América del Norte y 32.5% en América Latina). Esto sugiere que muchos estudiantes están dispuestos a continuar el curso incluso si no cumple completamente con sus expectativas iniciales."),
        (Aspect::Neutral, "Hay un porcentaje considerable de respuestas neutras en ambas regiones (26.9% en América del Norte y 29.3% en América Latina). Esto podría indicar que muchos estudiantes no están seguros de cómo reaccionarían en esta situación o que otros factores influyen en su decisión de continuar o abandonar el curso."),
    ]),
    chi_square: ChiSquareTable {
        rows: &[
            ChiSquareRow { test: "Chi-cuadrado de Pearson", value: "28.255ᵃ", df: "4", significance: "<.001" },
            ChiSquareRow { test: "Razón de verosimilitud", value: "28.634", df: "4", significance: "<.001" },
            ChiSquareRow { test: "Asociación lineal por lineal", value: "12.205", df: "1", significance: "<.001" },
            ChiSquareRow { test: "N de casos válidos", value: "1109", df: "", significance: "" },
        ],
        note: "ᵃ 0 casillas (0.0%) han esperado un recuento menor que 5. El recuento mínimo esperado es 39.95.",
    },
};
