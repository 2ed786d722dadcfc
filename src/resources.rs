//! Read-only MCP resources: skill documents plus three built-in references.

use crate::protocol::{ResourceContents, ResourceDescriptor};
use crate::skills::{self, SkillLibrary};

const MIME_MARKDOWN: &str = "text/markdown";

#[derive(Debug, Clone, Copy)]
enum Source {
    Skill(&'static str),
    Static(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    source: Source,
}

pub static RESOURCES: [Resource; 9] = [
    Resource {
        uri: "symbols://skills/domql-v3-reference",
        name: "domql-v3-reference",
        description: "Complete DOMQL v3 syntax reference and rules.",
        source: Source::Skill(skills::DOMQL_REFERENCE),
    },
    Resource {
        uri: "symbols://skills/project-structure",
        name: "project-structure",
        description: "Symbols project folder structure and file conventions.",
        source: Source::Skill(skills::PROJECT_STRUCTURE),
    },
    Resource {
        uri: "symbols://skills/design-direction",
        name: "design-direction",
        description: "Modern UI/UX design direction for generating Symbols interfaces.",
        source: Source::Skill(skills::DESIGN_DIRECTION),
    },
    Resource {
        uri: "symbols://skills/migration-guide",
        name: "migration-guide",
        description: "Guide for migrating React/Angular/Vue apps to Symbols/DOMQL v3.",
        source: Source::Skill(skills::MIGRATION_GUIDE),
    },
    Resource {
        uri: "symbols://skills/v2-to-v3-migration",
        name: "v2-to-v3-migration",
        description: "DOMQL v2 to v3 migration changes and examples.",
        source: Source::Skill(skills::V2_V3_MIGRATION),
    },
    Resource {
        uri: "symbols://skills/quickstart",
        name: "quickstart",
        description: "Symbols CLI setup and usage quickstart guide.",
        source: Source::Skill(skills::QUICKSTART),
    },
    Resource {
        uri: "symbols://reference/spacing-tokens",
        name: "spacing-tokens",
        description: "Spacing token reference for the Symbols design system.",
        source: Source::Static(SPACING_TOKENS),
    },
    Resource {
        uri: "symbols://reference/atom-components",
        name: "atom-components",
        description: "Built-in primitive atom components in Symbols.",
        source: Source::Static(ATOM_COMPONENTS),
    },
    Resource {
        uri: "symbols://reference/event-handlers",
        name: "event-handlers",
        description: "Event handler reference for Symbols/DOMQL v3.",
        source: Source::Static(EVENT_HANDLERS),
    },
];

pub fn find(uri: &str) -> Option<&'static Resource> {
    RESOURCES.iter().find(|r| r.uri == uri)
}

impl Resource {
    pub fn descriptor(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            uri: self.uri,
            name: self.name,
            description: self.description,
            mime_type: MIME_MARKDOWN,
        }
    }

    /// Skill-backed resources are read fresh on every call.
    pub fn read(&self, skills: &SkillLibrary) -> ResourceContents {
        let text = match self.source {
            Source::Skill(file) => skills.read(file),
            Source::Static(text) => text.to_string(),
        };
        ResourceContents {
            uri: self.uri.to_string(),
            mime_type: MIME_MARKDOWN,
            text,
        }
    }
}

const SPACING_TOKENS: &str = r#"# Symbols Spacing Tokens

Ratio-based system (base 16px, ratio 1.618 golden ratio):

| Token | ~px  | Token | ~px  | Token | ~px  |
|-------|------|-------|------|-------|------|
| X     | 3    | A     | 16   | D     | 67   |
| Y     | 6    | A1    | 20   | E     | 109  |
| Z     | 10   | A2    | 22   | F     | 177  |
| Z1    | 12   | B     | 26   |       |      |
| Z2    | 14   | B1    | 32   |       |      |
|       |      | B2    | 36   |       |      |
|       |      | C     | 42   |       |      |
|       |      | C1    | 52   |       |      |
|       |      | C2    | 55   |       |      |

Usage: padding: 'A B', gap: 'C', borderRadius: 'Z', fontSize: 'B1'
Tokens work with padding, margin, gap, width, height, borderRadius, position, and any spacing property.
Negative values: margin: '-Y1 -Z2 - auto'
Math: padding: 'A+V2'
"#;

const ATOM_COMPONENTS: &str = r#"# Symbols Atom Components (Primitives)

| Atom       | HTML Tag   | Description                   |
|------------|------------|-------------------------------|
| Text       | <span>     | Text content                  |
| Box        | <div>      | Generic container             |
| Flex       | <div>      | Flexbox container             |
| Grid       | <div>      | CSS Grid container            |
| Link       | <a>        | Anchor with built-in router   |
| Input      | <input>    | Form input                    |
| Radio      | <input>    | Radio button                  |
| Checkbox   | <input>    | Checkbox                      |
| Svg        | <svg>      | SVG container                 |
| Icon       | <svg>      | Icon from icon sprite         |
| IconText   | <div>      | Icon + text combination       |
| Button     | <button>   | Button with icon/text support |
| Img        | <img>      | Image element                 |
| Iframe     | <iframe>   | Embedded frame                |
| Video      | <video>    | Video element                 |

Usage examples:
  { Box: { padding: 'A', background: 'surface' } }
  { Flex: { flow: 'y', gap: 'B', align: 'center center' } }
  { Grid: { columns: 'repeat(3, 1fr)', gap: 'A' } }
  { Link: { text: 'Click here', href: '/dashboard' } }
  { Button: { text: 'Submit', theme: 'primary', icon: 'check' } }
  { Icon: { name: 'chevronLeft' } }
  { Img: { src: 'photo.png', boxSize: 'D D' } }
"#;

const EVENT_HANDLERS: &str = r#"# Symbols Event Handlers (v3)

## Lifecycle Events
  onInit: (el, state) => {}              // Once on creation
  onRender: (el, state) => {}            // On each render (return fn for cleanup)
  onUpdate: (el, state) => {}            // On props/state change
  onStateUpdate: (changes, el, state, context) => {}

## DOM Events
  onClick: (event, el, state) => {}
  onInput: (event, el, state) => {}
  onKeydown: (event, el, state) => {}
  onDblclick: (event, el, state) => {}
  onMouseover: (event, el, state) => {}
  onWheel: (event, el, state) => {}
  onSubmit: (event, el, state) => {}
  onLoad: (event, el, state) => {}

## Calling Functions
  onClick: (e, el) => el.call('functionName', args)  // Global function
  onClick: (e, el) => el.scope.localFn(el, s)        // Scope function
  onClick: (e, el) => el.methodName()                // Element method

## State Updates
  onClick: (e, el, s) => s.update({ count: s.count + 1 })
  onClick: (e, el, s) => s.toggle('isActive')
  onClick: (e, el, s) => s.root.update({ modal: '/add-item' })

## Navigation
  onClick: (e, el) => el.router('/dashboard', el.getRoot())

## Cleanup Pattern
  onRender: (el, s) => {
    const interval = setInterval(() => { /* ... */ }, 1000)
    return () => clearInterval(interval)  // Called on element removal
  }
"#;
