// Prompt templates for destiny reports.
// Placeholders: {name}, {gender}, {birth_datetime}, {birth_place}, {mbti}, {anonymous}

/// Shared persona taxonomy: 10 day masters × 2 sub-types = 20 personas.
/// Both templates embed it so the model labels the user consistently.
pub const PERSONA_TAXONOMY: &str = r#"PERSONA TAXONOMY (pick exactly one of the 20 personas):
The ten day masters, each split into a "Supported" sub-type (the day master is nourished by the chart)
and a "Drained" sub-type (the day master is controlled or exhausted by the chart):

1.  Jia Wood   — Supported: "Towering Pine"        | Drained: "Storm-Bent Oak"
2.  Yi Wood    — Supported: "Vine Collaborator"    | Drained: "Wandering Ivy"
3.  Bing Fire  — Supported: "Midday Sun"           | Drained: "Setting Sun"
4.  Ding Fire  — Supported: "Guiding Lantern"      | Drained: "Flickering Candle"
5.  Wu Earth   — Supported: "Steadfast Mountain"   | Drained: "Eroding Cliff"
6.  Ji Earth   — Supported: "Fertile Field"        | Drained: "Parched Garden"
7.  Geng Metal — Supported: "Forged Blade"         | Drained: "Unsheathed Ore"
8.  Xin Metal  — Supported: "Polished Jewel"       | Drained: "Buried Gem"
9.  Ren Water  — Supported: "Rolling River"        | Drained: "Restless Tide"
10. Gui Water  — Supported: "Morning Dew"          | Drained: "Drifting Mist""#;

/// Structured report prompt. The model must answer with JSON matching the
/// nested report schema; `icon` fields are presentation hints that the
/// sanitizer removes before the report leaves the service.
pub const STRUCTURED_REPORT_TEMPLATE: &str = r#"You are an expert in Chinese Four Pillars (BaZi) astrology and modern personality psychology.
Write a personal destiny report for the person below.

PERSON:
- Name: {name}
- Gender: {gender}
- Birth date and time: {birth_datetime}
- Birth place: {birth_place}
- MBTI: {mbti}
- Anonymous: {anonymous}

If Anonymous is true, never address the person by any name other than "{name}".

{persona_taxonomy}

PART 1 — BASIC INFO: derive the four pillars, the day master, the month branch and the matching persona.
PART 2 — KEY CONFIGURATIONS: the two to four chart elements that shape this person most.
PART 3 — PERSONALITY: three strengths and three challenges, each with a concrete everyday example.
If an MBTI type is known, weave it into the personality reading; if it is "unknown", infer nothing from it.
PART 4 — TRENDS for the current year: career, relationships, wealth and health.
PART 5 — RECOMMENDATIONS: lucky elements, favourable months, and three actionable suggestions.

Return ONLY a JSON object with this EXACT schema (no text outside the JSON):
{
  "basicInfo": {
    "name": "{name}",
    "fourPillars": "Geng-Wu year, Yi-You month, Yi-Mao day, Ding-Hai hour",
    "dayMaster": "Yi Wood",
    "monthBranch": "You Metal",
    "persona": "Yi Wood · Supported — Vine Collaborator",
    "mbti": "{mbti}",
    "summary": "One paragraph portrait of the person"
  },
  "keyConfigurations": [
    {"name": "Gui Water (rain of wisdom)", "description": "What it means for this person", "icon": "fa-tint"}
  ],
  "personality": {
    "strengths": [
      {"title": "Resource weaver", "description": "Strength with an everyday example", "icon": "fa-crown"}
    ],
    "challenges": [
      {"title": "Overthinking loop", "description": "Challenge with an everyday example", "icon": "fa-battery-quarter"}
    ]
  },
  "trends": {
    "career": {"title": "Kite on the east wind", "description": "Career outlook", "icon": "fa-briefcase"},
    "relationships": {"title": "Softness over force", "description": "Relationship outlook", "icon": "fa-heart"},
    "wealth": {"title": "Flowing water brings wealth", "description": "Wealth outlook", "icon": "fa-coins"},
    "health": {"title": "Water the roots", "description": "Health outlook", "icon": "fa-heartbeat"}
  },
  "recommendations": {
    "luckyElements": ["Water", "Wood"],
    "favourableMonths": ["March", "November"],
    "suggestions": [
      {"title": "Build a support frame", "description": "Actionable suggestion", "icon": "fa-seedling"}
    ]
  }
}"#;

/// Narrative report prompt. The model answers in free prose; the service
/// relays it verbatim as the `analysis` field.
pub const NARRATIVE_REPORT_TEMPLATE: &str = r#"You are an expert in Chinese Four Pillars (BaZi) astrology and modern personality psychology.
Write a warm, detailed destiny reading for the person below.

PERSON:
- Name: {name}
- Gender: {gender}
- Birth date and time: {birth_datetime}
- Birth place: {birth_place}
- MBTI: {mbti}
- Anonymous: {anonymous}

If Anonymous is true, never address the person by any name other than "{name}".

{persona_taxonomy}

Cover, in order: the four pillars and day master, the matching persona and why,
personality strengths and challenges, this year's career, relationship, wealth and
health trends, and concrete recommendations.
Answer in plain prose with short section headings. Do NOT answer in JSON."#;
