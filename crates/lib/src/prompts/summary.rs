//! # Video Summary Prompts
//!
//! The instruction block asking the model for tags, and the markdown template
//! the model fills in for the summary itself.
//!
//! Placeholders in `SUMMARY_PROMPT`: `{video_url}`, `{current_date}`, `{platform}`

/// Asks the model to emit a JSON array of tags before the markdown summary.
pub const TAG_GENERATION_PROMPT: &str = r#"Analyze this video and provide ONLY the following two items:

1. Generate 5-10 relevant tags as a JSON array:
["tag1", "tag2", "tag3"]

2. Create a professional markdown summary following the format below.

IMPORTANT:
- Provide ONLY the JSON array and markdown content
- NO conversational text, introductions, or conclusions
- NO code blocks around the JSON
- Start directly with the JSON array, then the markdown
- Do not include phrases like "Here's", "Hope this helps", etc.

Tags should cover:
- Specific topics in the video
- Technologies/tools mentioned
- Concepts/techniques discussed
- Industry/domain terms
- Content type (tutorial, review, etc.)

Format the response exactly as:
["tag1", "tag2", "tag3"]

[then the markdown content below]
"#;

/// The markdown skeleton of the summary.
pub const SUMMARY_PROMPT: &str = r#"
# 📹 [Video title]

> **Video URL**: {video_url}
> **Generated**: {current_date}
> **Platform**: {platform}

---

## 🎯 Executive Summary
*Write 2–3 sentences that capture the main topic, purpose, and key takeaway.*

---

## 📋 Key Information

| **Aspect** | **Details** |
|------------|-------------|
| **Duration** | [Video length or N/A] |
| **Speaker/Creator** | [Name or N/A] |
| **Main Topic** | [Primary subject] |
| **Content Type** | [Tutorial/Discussion/Review/etc.] |
| **Difficulty Level** | [Beginner/Intermediate/Advanced] |

---

## 📖 Detailed Content Breakdown

### 🔍 Main Topics Covered
- **Topic 1**: Brief explanation
- **Topic 2**: Brief explanation
- **Topic 3**: Brief explanation

### 📚 Core Concepts Explained
1. **Concept Name** – definition · why it matters · application
2. **Concept Name** – definition · why it matters · application

### 🛠️ Practical Examples & Demonstrations
- Example 1 – description & significance
- Example 2 – description & significance
- Example 3 – description & significance

---

## 💡 Key Takeaways & Insights

### ✅ Main Lessons
- **Lesson 1** – why it's important
- **Lesson 2** – why it's important
- **Lesson 3** – why it's important

### 🎯 Actionable Advice
- [ ] **Action item 1** – specific steps
- [ ] **Action item 2** – specific steps
- [ ] **Action item 3** – specific steps

### ⚡ Notable Quotes or Insights
> *"Include up to three memorable quotes (≤ 25 words each)."*

---

## 🎯 Target Audience & Prerequisites

### 👥 Who Should Watch This
- Primary audience
- Secondary audience
- Experience level needed

### 📚 Background Knowledge Needed
- Prerequisite 1
- Prerequisite 2
- Prerequisite 3

---

## 🔗 Related Topics & Further Learning

### 📖 Related Concepts
- Related topic 1
- Related topic 2
- Related topic 3

### 🎓 Suggested Next Steps
- Next step 1
- Next step 2
- Next step 3

---

## 📊 Content Quality Assessment

| **Criteria** | **Rating** | **Notes** |
|--------------|------------|-----------|
| **Information Value** | ⭐⭐⭐⭐⭐ | concise note |
| **Presentation Quality** | ⭐⭐⭐⭐⭐ | concise note |
| **Practical Applicability** | ⭐⭐⭐⭐⭐ | concise note |

---

## 🗺️ Visual Flow Chart

```mermaid
graph TD
    A[Video Topic] --> B{Main Categories}

    B --> C[Core Concepts]
    B --> D[Tools/Technologies]
    B --> E[Key Takeaways]
    B --> F[Practical Applications]

    C --> C1[Concept 1]
    C --> C2[Concept 2]
    C --> C3[Concept 3]

    D --> D1[Tool/Tech 1]
    D --> D2[Tool/Tech 2]
    D --> D3[Tool/Tech 3]

    E --> E1[Main Lesson 1]
    E --> E2[Main Lesson 2]
    E --> E3[Actionable Advice]

    F --> F1[Use Case 1]
    F --> F2[Use Case 2]
    F --> F3[Implementation]

    C1 --> G[Target Audience]
    D1 --> G
    E1 --> G
    F1 --> G

    G --> H[Next Steps]

    style A fill:#e1f5fe
    style B fill:#f3e5f5
    style G fill:#e8f5e8
    style H fill:#fff3e0
```

Replace with actual video content, tools, concepts, and outcomes.
"#;
