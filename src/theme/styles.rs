//! Global CSS styles for AutoValue.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-muted: #f5f6f8;
  --surface-overlay: rgba(255, 255, 255, 0.85);
  --border: #e2e5ea;

  /* Brand */
  --accent: #1f6feb;
  --accent-hover: #1858c4;

  /* Text */
  --text-primary: #1b1f24;
  --text-secondary: #57606a;
  --text-muted: #8c959f;

  /* Semantic */
  --danger: #d1242f;
  --success: #1a7f37;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-muted);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.page {
  max-width: 640px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.page-header { text-align: center; }

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
}

.tagline { color: var(--text-secondary); }

.offline-badge {
  display: inline-block;
  margin-top: 0.5rem;
  padding: 0.125rem 0.5rem;
  border-radius: 999px;
  background: var(--border);
  color: var(--text-secondary);
  font-size: var(--text-xs);
}

.page-footer {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.section-header {
  font-size: var(--text-lg);
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.body-text { color: var(--text-secondary); }

.gallery-section {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
}

.gallery-outline { outline: 1px dashed var(--danger); }

.notice {
  padding: 0.75rem 1rem;
  border-left: 3px solid var(--success);
  background: var(--surface);
}

.mono { font-family: var(--font-mono); }
.mt-2 { margin-top: 0.5rem; }
.text-sm { font-size: var(--text-sm); }
.text-danger { color: var(--danger); }

/* === Forms === */
.vin-form {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 500;
}

.input-field {
  padding: 0.625rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font-size: var(--text-base);
  text-transform: uppercase;
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
}

/* === Field Error === */
.field-error {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  margin-top: 0.25rem;
}

.field-error-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  line-height: 1;
}

/* === Loading Spinner === */
.loading-spinner {
  display: flex;
  align-items: center;
  justify-content: center;
}

.spinner-fullscreen {
  position: fixed;
  inset: 0;
  z-index: 50;
  background: var(--surface-overlay);
}

.spinner-inline { padding: 3rem 0; }

.spinner-content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.spinner-ring {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  background: var(--accent);
}

.spinner-message { color: var(--text-secondary); }

.animate-pulse { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-ghost {
  padding: 0.625rem 1.25rem;
  border-radius: 6px;
  font-size: var(--text-base);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #fff;
}

.btn-primary:hover { background: var(--accent-hover); }
.btn-primary:disabled { opacity: 0.6; cursor: default; }

.btn-secondary {
  background: transparent;
  border: 1px solid var(--accent);
  color: var(--accent);
}

.btn-ghost {
  background: transparent;
  border: 1px solid transparent;
  color: var(--text-secondary);
}

.icon-btn {
  width: 2rem;
  height: 2rem;
  border: none;
  background: transparent;
  font-size: var(--text-xl);
  line-height: 1;
  color: var(--text-muted);
  cursor: pointer;
}

.icon-btn:hover { color: var(--text-primary); }

/* === Valuation Content === */
.valuation-content {
  padding: 1.5rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 8px;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.valuation-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.valuation-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.valuation-details {
  display: grid;
  gap: 0.25rem;
}

.detail-row {
  display: flex;
  justify-content: space-between;
  color: var(--text-secondary);
}

.detail-row dd { color: var(--text-primary); }

.valuation-prices {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
}

.price-block {
  display: flex;
  flex-direction: column;
}

.price-label {
  font-size: var(--text-xs);
  text-transform: uppercase;
  color: var(--text-muted);
}

.price-value {
  font-size: var(--text-xl);
  font-weight: 600;
}

.price-value.muted { color: var(--text-secondary); }

.price-comparison {
  grid-column: 1 / -1;
  color: var(--text-secondary);
}

.valuation-missing { color: var(--text-muted); font-style: italic; }

.valuation-actions {
  display: flex;
  justify-content: flex-end;
}
"#;
