//! Style catalog - the built-in poster style presets
//!
//! The catalog is read-only data fixed at process start. Each style pairs
//! bilingual display text with the instruction block injected into the
//! generation prompt.

use serde::{Deserialize, Serialize};

/// A named aesthetic preset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Unique style key
    pub id: String,

    /// English display name
    pub name: String,

    /// Chinese display name
    #[serde(rename = "name_zh")]
    pub name_zh: String,

    /// Short English description
    pub description: String,

    /// Short Chinese description
    #[serde(rename = "description_zh")]
    pub description_zh: String,

    /// Accent color used by style cards
    #[serde(rename = "previewColor")]
    pub preview_color: String,

    /// Emoji shown on the style card
    pub icon: String,

    /// Instruction block appended to the generation prompt
    #[serde(rename = "promptInstruction")]
    pub prompt_instruction: String,
}

/// Read-only collection of style presets
#[derive(Debug, Clone)]
pub struct Catalog {
    styles: Vec<StyleProfile>,
}

impl Catalog {
    /// Create a catalog with the built-in 2025 poster styles
    pub fn builtin() -> Self {
        Self {
            styles: builtin_styles(),
        }
    }

    /// Create a catalog from an explicit style list
    pub fn new(styles: Vec<StyleProfile>) -> Self {
        Self { styles }
    }

    /// Look up a style by id
    pub fn get(&self, id: &str) -> Option<&StyleProfile> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// All styles, in definition order
    pub fn all(&self) -> &[StyleProfile] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn style(
    id: &str,
    name: &str,
    name_zh: &str,
    description: &str,
    description_zh: &str,
    preview_color: &str,
    icon: &str,
    prompt_instruction: &str,
) -> StyleProfile {
    StyleProfile {
        id: id.to_string(),
        name: name.to_string(),
        name_zh: name_zh.to_string(),
        description: description.to_string(),
        description_zh: description_zh.to_string(),
        preview_color: preview_color.to_string(),
        icon: icon.to_string(),
        prompt_instruction: prompt_instruction.to_string(),
    }
}

fn builtin_styles() -> Vec<StyleProfile> {
    vec![
        style(
            "neo-song",
            "Neo-Song Aesthetics",
            "新宋式极简美学",
            "Minimalist, negative space, archaic elegance, low saturation.",
            "极简，留白，古朴雅致，低饱和度高级灰。",
            "#7D929F",
            "🍵",
            "Style: Neo-Song Aesthetics (新宋式极简美学).\n\
             Core Philosophy: Minimalist, negative space (reserving white space), archaic elegance, serenity.\n\
             Visuals: Low saturation 'advanced gray' tones (Ru Kiln Blue, Rice Paper White, Ink Black).\n\
             Typography: Thin Serif/Song Ti, vertical layout.\n\
             Texture: Rice paper texture, ink wash blur, slight noise.\n\
             Composition: Asymmetrical balance.\n\
             Mood: Quiet, elegant, scholarly.",
        ),
        style(
            "avant-garde-guochao",
            "Avant-Garde Guochao",
            "先锋国潮",
            "Cyber-traditional, neon meets ink, psychedelic, fluid.",
            "赛博紫与水墨的碰撞，迷幻流体，故障艺术。",
            "#B026FF",
            "🔮",
            "Style: Avant-Garde Guochao (先锋国潮).\n\
             Core Philosophy: Collision of traditional Chinese ink/porcelain with future tech/glitch art.\n\
             Visuals: Cyber Purple, Neon Pink, Holographic Blue against Midnight Black.\n\
             Elements: Fluidity, mesh gradients, luminous glow, digital glitches mixed with traditional patterns.\n\
             Mood: Psychedelic, conflicting, deja vu, high impact.",
        ),
        style(
            "playful-guochao",
            "Playful Guochao Pop",
            "趣味国潮波普",
            "Historical figures with modern items, flat vector, humorous.",
            "古人玩转现代科技，扁平矢量插画，反差萌。",
            "#FFD700",
            "🕶️",
            "Style: Playful Guochao Pop Fusion (趣味国潮).\n\
             Core Concept: Anachronistic collage. Ancient figures (emperors, scholars) using modern tech (laptops, sunglasses).\n\
             Visuals: Flat faux-traditional vector illustration with thick lines.\n\
             Colors: Low saturation background (beige) with high saturation accents (pop red, fluorescent).\n\
             Mood: Humorous, playful, absurd, relatable.",
        ),
        style(
            "diffusion-dream",
            "Diffusion Dream",
            "浮光幻梦",
            "Frosted glass, gradients, grainy noise, hazy, pastel.",
            "磨砂玻璃质感，柔和渐变，胶片噪点，朦胧诗意。",
            "#FFB7B2",
            "🌫️",
            "Style: Diffusion Gradient & Grainy Dream (浮光幻梦).\n\
             Core Concept: Out of focus, fluid, atmospheric, frosted glass effect.\n\
             Visuals: Gaussian blur, gradient mesh, high-key dreamy pastels (pink, blue, mint).\n\
             Texture: Essential heavy film grain/noise overlay.\n\
             Mood: Hazy, poetic, fluid, healing, soft.",
        ),
        style(
            "dopamine-brights",
            "Dopamine Brights",
            "多巴胺高亮风",
            "High saturation, collage, Y2K, maximalist, joyful.",
            "高饱和度彩虹色，拼贴艺术，Y2K，快乐张扬。",
            "#00FF00",
            "🌈",
            "Style: Dopamine Brights / Gen Z Maximalism.\n\
             Core Concept: Visual vitamin. High saturation, acid pop.\n\
             Visuals: Rainbow palette (Gen Z Yellow, Klein Blue, Barbie Pink).\n\
             Elements: Collage art, stickers, Memphis shapes, emojis.\n\
             Layout: Chaotic, overlapping, breaking the grid.\n\
             Mood: Energetic, joyful, expressive, loud.",
        ),
        style(
            "deconstructed",
            "Deconstructed Layout",
            "现代解构排版",
            "Broken grid, typography heavy, brutalist, experimental.",
            "打破网格，文字为主，粗野主义，实验性设计。",
            "#1A1A1A",
            "📐",
            "Style: Modern Experimental Deconstructed Layout.\n\
             Core Concept: Order within disorder. Typography as the main visual element.\n\
             Visuals: Oversized headlines, mixed fonts (Serif vs Sans), utilitarian UI elements (barcodes, timestamps).\n\
             Composition: Overlapping text and images, cropped edges, chaotic but balanced.\n\
             Colors: High contrast (Black/White + Neon) or Morandi.\n\
             Mood: Avant-garde, free, artsy.",
        ),
        style(
            "soft-3d",
            "Soft 3D / Clay",
            "软萌3D / 粘土风",
            "Claymorphism, inflated shapes, soft lighting, cute.",
            "粘土拟物，膨胀形状，柔光渲染，Q弹治愈。",
            "#FF99CC",
            "🎈",
            "Style: 3D Hyper-Tactile & Material Pop (Soft 3D).\n\
             Core Concept: Tactile empathy, claymorphism, inflated art.\n\
             Visuals: Materials like matte clay, glossy balloon/plastic, felt/fur.\n\
             Shapes: Rounded, chubby, no sharp edges.\n\
             Lighting: Soft studio global illumination, occlusion.\n\
             Colors: Candy pastels, bright warm tones.\n\
             Mood: Healing, cute, playful, warm.",
        ),
        style(
            "acid-collage",
            "Acid Collage",
            "酸性波普拼贴",
            "Receipts, stickers, high contrast, industrial, chaotic.",
            "生活碎片，贴纸感，高对比度，有序混乱的工业风。",
            "#CCFF00",
            "🧾",
            "Style: Playful Acid Collage / Gen Z Scrapbook.\n\
             Core Concept: Organized chaos, everyday symbols (receipts, warnings).\n\
             Visuals: Sticker art look with white strokes, pixel icons, Windows 95 UI elements.\n\
             Colors: High contrast, acid neon accents (Hot Pink, Caution Yellow) on neutral backgrounds.\n\
             Mood: Trendy, rebellious, deconstructed.",
        ),
        style(
            "y3k",
            "Y3K Future",
            "Y3K 未来美学",
            "Liquid metal, silver, bio-tech, ethereal, AI surrealism.",
            "液态金属，生化科技，空灵，AI超现实主义。",
            "#C0C0C0",
            "👽",
            "Style: Y3K (Year 3000 Aesthetics).\n\
             Core Concept: Fluid organic forms meet high-tech. Liquid metal.\n\
             Visuals: Chrome/Silver, Holographic Ice Blue, Iridescent White.\n\
             Texture: High-gloss liquid metal, aerogel, bionic skin.\n\
             Subject: Cyborgs, avatars, mutated nature, floating tech.\n\
             Mood: Ethereal, cold, post-human, surreal.",
        ),
        style(
            "neo-brutalism",
            "Neo-Brutalism",
            "新丑风 / 酸性设计",
            "Eye-straining contrast, raw, glitch, anti-design.",
            "视觉冲击，反设计，故障艺术，高对比撞色。",
            "#0000FF",
            "⚠️",
            "Style: Neo-Brutalism & Acid Graphics.\n\
             Core Concept: Rebellion, anti-design, \"ugly-cool\".\n\
             Visuals: Eye-straining colors (Klein Blue + Green), stretched fonts, pixel art, glitch effects.\n\
             Composition: Decentralized, raw, unpolished.\n\
             Mood: Raw, playful, maverick, retro-futurist.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_size() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        let style = catalog.get("y3k").unwrap();
        assert_eq!(style.name, "Y3K Future");
        assert!(style.prompt_instruction.contains("Liquid metal"));
    }

    #[test]
    fn test_unknown_id_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("vaporwave").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::builtin();
        for (i, a) in catalog.all().iter().enumerate() {
            for b in catalog.all().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_definition_order_is_stable() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all()[0].id, "neo-song");
        assert_eq!(catalog.all()[9].id, "neo-brutalism");
    }
}
