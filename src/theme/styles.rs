//! Global CSS styles for Facewall.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface-deep: #10131a;
  --surface-raised: #1a1f2a;
  --surface-border: #2a3140;

  /* Accent */
  --accent: #4cc9b0;
  --accent-glow: rgba(76, 201, 176, 0.25);

  /* Text */
  --text-primary: #f2f4f8;
  --text-secondary: rgba(242, 244, 248, 0.7);
  --text-muted: rgba(242, 244, 248, 0.45);

  /* Semantic */
  --danger: #ff5d73;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', -apple-system, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-deep);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page Layout === */
.page {
  max-width: 1200px;
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 2rem;
}

.page-title {
  font-size: 1.75rem;
  font-weight: 600;
  letter-spacing: 0.02em;
  color: var(--accent);
}

/* === Search Bar === */
.search-bar {
  display: flex;
  gap: 0.5rem;
}

.search-input {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: inherit;
  font-size: 0.9rem;
  padding: 0.5rem 0.75rem;
  width: 240px;
  transition: border-color var(--transition-fast);
}

.search-input:focus {
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
  outline: none;
}

.search-submit {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  cursor: pointer;
  font-size: 0.9rem;
  padding: 0.5rem 0.75rem;
  transition: border-color var(--transition-fast);
}

.search-submit:hover {
  border-color: var(--accent);
}

/* === Gallery Grid === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.gallery-state {
  padding: 4rem 0;
  text-align: center;
  color: var(--text-secondary);
}

.gallery-state .error-text {
  color: var(--danger);
}

/* === Profile Cards === */
.profile-card {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 10px;
  cursor: pointer;
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
  animation: card-enter var(--transition-normal) backwards;
  animation-delay: calc(var(--index) * 40ms);
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.profile-card:hover {
  border-color: var(--accent);
  transform: translateY(-2px);
}

@keyframes card-enter {
  from { opacity: 0; transform: translateY(8px); }
  to   { opacity: 1; transform: translateY(0); }
}

.card-portrait__img {
  border-radius: 50%;
  height: 72px;
  width: 72px;
  object-fit: cover;
}

.card-info {
  min-width: 0;
}

.card-name {
  font-size: 1rem;
  font-weight: 600;
  text-transform: capitalize;
}

.card-text {
  color: var(--text-secondary);
  font-size: 0.82rem;
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

.card-locality {
  color: var(--text-muted);
  text-transform: capitalize;
}

/* === Modal === */
.modal-overlay {
  background: rgba(8, 10, 14, 0.75);
  display: flex;
  align-items: center;
  justify-content: center;
  position: fixed;
  inset: 0;
  z-index: 10;
}

.modal {
  background: var(--surface-raised);
  border: 1px solid var(--surface-border);
  border-radius: 12px;
  max-width: 420px;
  padding: 2rem;
  position: relative;
  text-align: center;
  width: 90%;
}

.modal-close-btn {
  background: none;
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  color: var(--text-secondary);
  cursor: pointer;
  padding: 0.2rem 0.6rem;
  position: absolute;
  right: 0.75rem;
  top: 0.75rem;
}

.modal-close-btn:hover {
  border-color: var(--danger);
  color: var(--danger);
}

.modal-portrait {
  border-radius: 50%;
  height: 140px;
  width: 140px;
  object-fit: cover;
  margin-bottom: 0.75rem;
}

.modal-name {
  font-size: 1.2rem;
  text-transform: capitalize;
}

.modal-text {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.modal hr {
  border: none;
  border-top: 1px solid var(--surface-border);
  margin: 0.75rem 0;
}

.modal-error-text {
  color: var(--danger);
  font-size: 0.9rem;
}

.modal-btn-container {
  display: flex;
  gap: 0.75rem;
  justify-content: center;
  margin-top: 1.25rem;
}

.modal-btn {
  background: none;
  border: 1px solid var(--surface-border);
  border-radius: 6px;
  color: var(--text-primary);
  cursor: pointer;
  font-size: 0.85rem;
  padding: 0.4rem 1.1rem;
  transition: border-color var(--transition-fast);
}

.modal-btn:hover {
  border-color: var(--accent);
}
"#;
