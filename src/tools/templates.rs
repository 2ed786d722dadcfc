//! Prompt templates sent to the completion API by the generation tools.

const ICON_BUTTON_EXAMPLE: &str = "\
   IconBtn: { extends: 'Flex', tag: 'button', flexAlign: 'center center', cursor: 'pointer',
     Svg: { viewBox: '0 0 24 24', width: '22', height: '22', color: 'primary',
       html: '<path d=\"...\" fill=\"currentColor\"/>' } }";

pub fn component(ctx: &str, component_name: &str, description: &str, interactive: bool) -> String {
    let interactive_note = if interactive {
        "
IMPORTANT - This component must be INTERACTIVE:
- Include realistic event handlers (onClick, onInput, onSubmit, etc.)
- Add state management where needed (state: { ... }, s.update({ ... }))
- Use scope: { ... } for local helper functions
- Make buttons, inputs, and toggles functional
"
    } else {
        ""
    };

    format!(
        "You are an expert Symbols/DOMQL v3 developer. Generate a production-ready component.

{ctx}

---

TASK: Create a component named `{component_name}` based on this description:

{description}

{interactive_note}

RULES:
1. Output ONLY the JavaScript code - no markdown, no explanations.
2. Use DOMQL v3 syntax exclusively (extends, childExtends, flattened props, onX events).
3. Use design-system tokens for spacing (padding: 'A', gap: 'B'), colors, and typography.
4. Components are plain objects with named exports: export const {component_name} = {{ ... }}
5. NO imports between project files. Reference child components by PascalCase key.
6. Keep folders flat - this is a single component file.
7. Follow the modern UI/UX direction: clarity, hierarchy, minimal cognitive load.

CRITICAL ICON RULES - ALWAYS FOLLOW:
8. NEVER use `Icon` component inside `Button` or `Flex+tag:button` - it will NOT render.
9. For icon buttons, use `extends: 'Flex', tag: 'button'` with a `Svg` child (key must be `Svg`):
{ICON_BUTTON_EXAMPLE}
10. The `html` prop ONLY works on the `Svg` atom - NOT on Flex/Box/Button.
11. For standalone SVG icons (not in buttons), use key name `Svg` directly.
12. Use `flexAlign` (not `align`) for alignItems+justifyContent shorthand on Flex.
13. Functions called via `el.call('fnName', arg)` receive the element as `this`, NOT as first arg.
    Inside functions: use `this.node` for DOM access. NEVER pass `el` as an argument to `el.call()`.
14. In `onRender`, guard against double-init: `if (el.__initialized) return; el.__initialized = true`.

OUTPUT:
"
    )
}

pub fn page(ctx: &str, page_name: &str, route: &str, description: &str) -> String {
    format!(
        "You are an expert Symbols/DOMQL v3 developer. Generate a production-ready page.

{ctx}

---

TASK: Create a page named `{page_name}` (route: {route}) based on this description:

{description}

RULES:
1. Output ONLY the JavaScript code - no markdown, no explanations.
2. Pages extend from 'Page': export const {page_name} = {{ extends: 'Page', ... }}
3. Use DOMQL v3 syntax exclusively.
4. Use design-system tokens for all spacing, colors, typography.
5. Reference child components by PascalCase key name - no imports.
6. Include onRender/onInit for data loading if the page needs dynamic data.
7. Follow modern UI/UX: clear hierarchy, confident typography, balanced composition.
8. Pages use dash-case filenames but camelCase exports.

CRITICAL RULES - ALWAYS FOLLOW:
9. NEVER use `Icon` inside `Button` or `Flex+tag:button` - use `Svg` atom with `html` prop instead.
{ICON_BUTTON_EXAMPLE}
10. `html` prop ONLY works on `Svg` atom - NOT on Flex/Box/Button.
11. Use `flexAlign` (not `align`) for combined alignItems+justifyContent on Flex.
12. `el.call('fn', arg)` passes element as `this` inside fn - NEVER pass `el` as argument.
13. Guard `onRender` against double-init: `if (el.__initialized) return; el.__initialized = true`.

OUTPUT:
"
    )
}

pub fn project(ctx: &str, project_structure: &str, project_name: &str, description: &str) -> String {
    format!(
        "You are an expert Symbols/DOMQL v3 architect. Generate a COMPLETE project.

{ctx}

---

PROJECT STRUCTURE REFERENCE:
{project_structure}

---

TASK: Create a complete Symbols project called \"{project_name}\" based on:

{description}

OUTPUT FORMAT - Return a JSON object with this exact structure:
{{
  \"type\": \"project_structure\",
  \"title\": \"Project title\",
  \"description\": \"Brief description\",
  \"files\": [
    {{
      \"path\": \"smbls/index.js\",
      \"language\": \"javascript\",
      \"code\": \"// file contents here\"
    }}
  ]
}}

MANDATORY FILE TEMPLATES - every generated project MUST follow these exactly:

smbls/components/index.js - MUST use `export *` NOT `export * as`:
  export * from './Navbar.js'
  export * from './Card.js'

smbls/pages/index.js - the ONLY file where imports are allowed:
  import {{ main }} from './main.js'
  export default {{ '/': main }}

smbls/pages/main.js - pages MUST extend 'Page':
  export const main = {{ extends: 'Page', ... }}

smbls/functions/index.js:
  export * from './myFunction.js'

smbls/functions/myFunction.js - functions use named function expressions:
  export const myFunction = function myFunction(arg) {{
    const node = this.node
  }}

smbls/state.js - inline initial state, NO imports:
  export default {{ activePage: 'home', user: {{}}, items: [] }}

smbls/index.js - root registry:
  export {{ default as state }} from './state.js'
  export {{ default as dependencies }} from './dependencies.js'
  export * as components from './components/index.js'
  export {{ default as pages }} from './pages/index.js'
  export * as functions from './functions/index.js'
  export * as methods from './methods/index.js'
  export {{ default as designSystem }} from './designSystem/index.js'

MULTI-VIEW NAVIGATION - use DOM IDs + switchView function, NOT reactive display bindings:
  HomeView: {{ id: 'view-home', extends: 'Flex', flexDirection: 'column' }},
  AboutView: {{ id: 'view-about', extends: 'Flex', flexDirection: 'column', display: 'none' }},
  onClick: (e, el) => {{ el.call('switchView', 'about') }}
  export const switchView = function switchView(view) {{
    ['home', 'about'].forEach(function(v) {{
      const el = document.getElementById('view-' + v)
      if (el) el.style.display = v === view ? 'flex' : 'none'
    }})
  }}

RULES:
1. Include ALL required files: smbls/index.js, smbls/state.js, smbls/dependencies.js, smbls/pages/index.js, smbls/components/index.js, smbls/functions/index.js, smbls/designSystem/index.js
2. Generate meaningful component, page, and function files for the described app.
3. Use DOMQL v3 syntax exclusively - NO React/Vue/Angular syntax.
4. Use design-system tokens for spacing/colors - NOT hardcoded pixel values.
5. All folders are FLAT - no subfolders within components/, pages/, functions/, etc.
6. Components: named exports (`export const X = {{}}`). DesignSystem: default exports.
7. NO imports between component/function/page files - reference components by PascalCase key in tree.
8. Output ONLY the JSON - no markdown fences, no explanations.

CRITICAL RULES - violations cause silent failures (black page, nothing renders):
9. `components/index.js`: ALWAYS `export * from './X.js'` - NEVER `export * as X from './X.js'`
10. Pages: ALWAYS `extends: 'Page'` - NEVER `extends: 'Flex'` or `extends: 'Box'`
11. NEVER use `Icon` inside `Button` or `Flex+tag:button` - use `Svg` atom with `html` prop.
12. `html` prop ONLY works on `Svg` atom - NOT on Flex/Box/Button.
13. `flexAlign` (not `align`) for alignItems+justifyContent shorthand on Flex.
14. `el.call('fn', arg)` - element is `this` inside fn - NEVER pass `el` as argument.
15. Guard `onRender`: `if (el.__initialized) return; el.__initialized = true`
16. State updates: `s.update({{ key: val }})` - NEVER mutate `s.key = val` directly.
17. `childExtends` MUST be a string name - NEVER an inline object.
18. Color opacity: NEVER use `color: 'white .7'`. Define named tokens in COLOR.js and reference them.
19. Border shorthand: NEVER use `border: '2px solid transparent'`. Split into borderWidth, borderStyle, borderColor. Only `border: 'none'` is safe.

OUTPUT:
"
    )
}

pub fn convert(
    ctx: &str,
    migration_guide: &str,
    v3_migration: &str,
    source_framework: &str,
    code: &str,
) -> String {
    format!(
        "You are an expert migration assistant converting code to Symbols/DOMQL v3.

{ctx}

---

MIGRATION REFERENCE:
{migration_guide}

V2->V3 CHANGES:
{v3_migration}

---

TASK: Convert this {source_framework} code to Symbols/DOMQL v3 format:

```
{code}
```

RULES:
1. Output ONLY the converted Symbols/DOMQL v3 code - no markdown, no explanations.
2. Use v3 syntax ONLY: extends (not extend), childExtends (not childExtend), flattened props (no props: wrapper), onX events (no on: wrapper).
3. Replace all framework-specific patterns (useState, useEffect, v-if, *ngFor, etc.) with Symbols equivalents.
4. Use design-system tokens for spacing and colors where possible.
5. NO imports between project files - reference components by PascalCase key.
6. Components are plain objects with named exports.
7. Extract styles into flattened props with design tokens.

OUTPUT:
"
    )
}

pub fn explain(ctx: &str, concept: &str) -> String {
    format!(
        "You are an expert Symbols/DOMQL v3 instructor.

{ctx}

---

TASK: Explain the concept \"{concept}\" in Symbols/DOMQL v3.

RULES:
1. Give a clear, concise explanation (2-3 paragraphs max).
2. Include 1-2 practical code examples using DOMQL v3 syntax.
3. Highlight common mistakes and how to avoid them.
4. Reference relevant design-system tokens or patterns where applicable.
5. Do NOT use React/Vue/Angular - only Symbols/DOMQL v3.

OUTPUT:
"
    )
}

pub fn review(ctx: &str, code: &str) -> String {
    format!(
        "You are a strict Symbols/DOMQL v3 code reviewer.

{ctx}

---

TASK: Review this Symbols/DOMQL code for correctness and best practices:

```javascript
{code}
```

CHECK FOR:
1. v2 syntax violations: extend (should be extends), childExtend (should be childExtends), props: {{ }} wrapper, on: {{ }} wrapper
2. Forbidden imports between project files
3. Function-based components (must be plain objects)
4. Subfolder usage (must be flat)
5. Hardcoded pixel values instead of design tokens
6. Incorrect event handler signatures
7. Missing or incorrect extends declarations
8. Default exports for components (should use named exports)

OUTPUT FORMAT:
- List issues found with line references
- Provide corrected code for each issue
- Give an overall score (1-10) for v3 compliance
- Suggest improvements for better Symbols patterns

OUTPUT:
"
    )
}

pub fn design_system(
    ctx: &str,
    design_direction: &str,
    description: &str,
    include_theme: bool,
    include_icons: bool,
) -> String {
    let theme_entry = if include_theme {
        "{ \"path\": \"designSystem/theme.js\", \"code\": \"...\" },"
    } else {
        ""
    };
    let icons_entry = if include_icons {
        "{ \"path\": \"designSystem/icons.js\", \"code\": \"...\" },"
    } else {
        ""
    };

    format!(
        "You are an expert Symbols design-system architect.

{ctx}

---

DESIGN DIRECTION:
{design_direction}

---

TASK: Create a complete design system for: \"{description}\"

Generate the following files as a JSON object:
{{
  \"files\": [
    {{ \"path\": \"designSystem/color.js\", \"code\": \"export default {{ ... }}\" }},
    {{ \"path\": \"designSystem/spacing.js\", \"code\": \"export default {{ ... }}\" }},
    {{ \"path\": \"designSystem/typography.js\", \"code\": \"export default {{ ... }}\" }},
    {theme_entry}
    {icons_entry}
    {{ \"path\": \"designSystem/index.js\", \"code\": \"...\" }}
  ]
}}

RULES:
1. Colors: Define a cohesive palette with semantic names. Support dark/light modes using array format.
2. Spacing: Use base + ratio system (default base: 16, ratio: 1.618).
3. Typography: Use base + ratio system (default base: 16, ratio: 1.25).
4. Theme: Define component themes (button, field, document, transparent) with @dark/@light variants.
5. Icons: Use inline SVG strings with camelCase keys and currentColor for fill/stroke.
6. Index: Import and re-export all design system modules.
7. All files use default exports.
8. Output ONLY the JSON - no markdown, no explanations.

OUTPUT:
"
    )
}
